//! Canned replies used when the remote model cannot be reached at all.

struct FallbackTable {
    greeting: &'static str,
    investment: &'static str,
    savings: &'static str,
    general: &'static str,
}

const ENGLISH: FallbackTable = FallbackTable {
    greeting: "Thank you for your question about financial planning. I'm currently experiencing some technical difficulties, but I'd be happy to provide some general guidance.",
    investment: "For investment advice, I recommend consulting with a certified financial advisor who can provide personalized guidance based on your specific situation.",
    savings: "Building a savings habit is crucial for financial health. Consider starting with a goal to save at least 20% of your income.",
    general: "I apologize, but I'm currently unable to provide detailed financial advice due to technical issues. Please try again later or consult with a financial professional.",
};

const HINDI: FallbackTable = FallbackTable {
    greeting: "आपके वित्तीय योजना के बारे में प्रश्न के लिए धन्यवाद। मुझे वर्तमान में कुछ तकनीकी कठिनाइयां हो रही हैं।",
    investment: "निवेश सलाह के लिए, मैं एक प्रमाणित वित्तीय सलाहकार से सलाह लेने की सिफारिश करता हूं।",
    savings: "बचत की आदत बनाना वित्तीय स्वास्थ्य के लिए महत्वपूर्ण है।",
    general: "मुझे खुशी होगी कि मैं आपकी सहायता कर सकूं, लेकिन वर्तमान में तकनीकी समस्याएं हैं।",
};

/// Keyword-matched canned reply. Hindi gets its own table, every other
/// language the English one. Matching is plain substring search, checked in
/// the order investment, savings, greeting.
pub fn fallback_response(query: &str, language_code: &str) -> &'static str {
    let table = match language_code {
        "hi" => &HINDI,
        _ => &ENGLISH,
    };
    let query = query.to_lowercase();

    if query.contains("invest") || query.contains("निवेश") {
        table.investment
    } else if query.contains("save") || query.contains("बचत") {
        table.savings
    } else if query.contains("hello") || query.contains("hi") || query.contains("नमस्ते") {
        table.greeting
    } else {
        table.general
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_keywords() {
        assert_eq!(fallback_response("Where to INVEST 1 lakh?", "en"), ENGLISH.investment);
        assert_eq!(fallback_response("How to save money?", "en"), ENGLISH.savings);
        assert_eq!(fallback_response("hello there", "en"), ENGLISH.greeting);
        assert_eq!(fallback_response("EMI calculation", "en"), ENGLISH.general);
    }

    #[test]
    fn test_investment_wins_over_savings() {
        assert_eq!(
            fallback_response("Should I save or invest?", "en"),
            ENGLISH.investment
        );
    }

    #[test]
    fn test_hindi_table() {
        assert_eq!(fallback_response("निवेश कहाँ करें?", "hi"), HINDI.investment);
        assert_eq!(fallback_response("बचत", "hi"), HINDI.savings);
        assert_eq!(fallback_response("नमस्ते", "hi"), HINDI.greeting);
        assert_eq!(fallback_response("कर योजना", "hi"), HINDI.general);
    }

    #[test]
    fn test_other_languages_use_english_table() {
        assert_eq!(fallback_response("How to save money?", "ta"), ENGLISH.savings);
    }

    #[test]
    fn test_deterministic() {
        let a = fallback_response("hello", "hi");
        let b = fallback_response("hello", "hi");
        assert_eq!(a, b);
    }
}
