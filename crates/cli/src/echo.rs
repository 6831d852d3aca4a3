use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Sitesplit".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Split inline styles, scripts, and assets out of HTML pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let (color, indicator) = if ms < 50.0 {
        ("green", "fast")
    } else if ms < 100.0 {
        ("yellow", "moderate")
    } else {
        ("red", "slow")
    };

    match color {
        "green" => eprintln!(
            "  {} {:>8.2}ms ({})",
            format!("{}:", label).dimmed(),
            ms,
            indicator.dimmed()
        ),
        "yellow" => eprintln!(
            "  {} {:>8.2}ms ({})",
            format!("{}:", label).dimmed(),
            ms,
            indicator.yellow()
        ),
        _ => eprintln!(
            "  {} {:>8.2}ms ({})",
            format!("{}:", label).dimmed(),
            ms,
            indicator.red()
        ),
    }
}
