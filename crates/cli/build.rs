use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("sitesplit")
        .version("1.0.0")
        .author("Sitesplit Contributors")
        .about("Split inline styles, scripts, and assets out of HTML pages")
        .arg(clap::arg!([DIR] "Directory scanned for .html pages").default_value("."))
        .arg(
            clap::arg!(--file <FILE> "Restructure exactly one page, written as index.html")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-p --project <NAME> "Project name: output directory and archive stem").default_value("site"))
        .arg(
            clap::arg!(-o --out_dir <DIR> "Directory the output tree and archive are written into")
                .default_value(".")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--no_archive "Skip writing the zip archive"))
        .arg(clap::arg!(--json "Print the build report as JSON on stdout"))
        .arg(clap::arg!(-v --verbose "Enable step-by-step progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sitesplit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sitesplit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sitesplit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sitesplit", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
