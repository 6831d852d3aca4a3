//! Script fragment classification.
//!
//! Each extracted script fragment is assigned to exactly one of three named
//! buckets by a case-insensitive keyword search over its raw text, using
//! first-match priority. Classification is a pure function of the fragment
//! text, applied once; fragments are never reclassified or split.

/// The named groups script fragments are sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Fragments mentioning chat functionality.
    Chatbot,
    /// Fragments mentioning dividend or loan arithmetic.
    Calculator,
    /// Everything else.
    Main,
}

impl Bucket {
    /// All buckets, in the order their files are written and referenced.
    pub const ALL: [Bucket; 3] = [Bucket::Chatbot, Bucket::Calculator, Bucket::Main];

    /// Filename of this bucket's shared script file.
    pub fn file_name(&self) -> &'static str {
        match self {
            Bucket::Chatbot => "chatbot.js",
            Bucket::Calculator => "calculator.js",
            Bucket::Main => "main.js",
        }
    }
}

/// Assigns a script fragment to a bucket.
///
/// Priority is first-match: `chat` wins over `dividend`/`loan`, and
/// fragments containing neither land in [`Bucket::Main`].
pub fn classify_script(code: &str) -> Bucket {
    let lower = code.to_lowercase();
    if lower.contains("chat") {
        Bucket::Chatbot
    } else if lower.contains("dividend") || lower.contains("loan") {
        Bucket::Calculator
    } else {
        Bucket::Main
    }
}

/// Ordered fragment storage for the three script buckets.
///
/// Fragments are append-only and preserve insertion order; the aggregate
/// writer consumes each sequence exactly once.
#[derive(Debug, Default)]
pub struct ScriptBuckets {
    chatbot: Vec<String>,
    calculator: Vec<String>,
    main: Vec<String>,
}

impl ScriptBuckets {
    /// Appends a fragment to the given bucket.
    pub fn push(&mut self, bucket: Bucket, fragment: String) {
        match bucket {
            Bucket::Chatbot => self.chatbot.push(fragment),
            Bucket::Calculator => self.calculator.push(fragment),
            Bucket::Main => self.main.push(fragment),
        }
    }

    /// The fragments collected so far for `bucket`, in insertion order.
    pub fn fragments(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Chatbot => &self.chatbot,
            Bucket::Calculator => &self.calculator,
            Bucket::Main => &self.main,
        }
    }

    /// Number of fragments in `bucket`.
    pub fn count(&self, bucket: Bucket) -> usize {
        self.fragments(bucket).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("openChatWindow();", Bucket::Chatbot)]
    #[case("const CHAT_URL = '/api';", Bucket::Chatbot)]
    #[case("computeDividend(rate);", Bucket::Calculator)]
    #[case("loanSchedule(amount);", Bucket::Calculator)]
    #[case("document.title = 'x';", Bucket::Main)]
    #[case("", Bucket::Main)]
    fn test_classify(#[case] code: &str, #[case] expected: Bucket) {
        assert_eq!(classify_script(code), expected);
    }

    #[test]
    fn test_chat_beats_calculator_keywords() {
        let code = "chatAboutLoanDividends();";
        assert_eq!(classify_script(code), Bucket::Chatbot);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify_script("LOANCALC()"), Bucket::Calculator);
    }

    #[test]
    fn test_buckets_preserve_insertion_order() {
        let mut buckets = ScriptBuckets::default();
        buckets.push(Bucket::Main, "first();".to_string());
        buckets.push(Bucket::Main, "second();".to_string());
        buckets.push(Bucket::Chatbot, "chat();".to_string());

        assert_eq!(buckets.fragments(Bucket::Main), ["first();", "second();"]);
        assert_eq!(buckets.count(Bucket::Chatbot), 1);
        assert_eq!(buckets.count(Bucket::Calculator), 0);
    }

    #[test]
    fn test_bucket_file_names() {
        let names: Vec<&str> = Bucket::ALL.iter().map(|b| b.file_name()).collect();
        assert_eq!(names, vec!["chatbot.js", "calculator.js", "main.js"]);
    }
}
