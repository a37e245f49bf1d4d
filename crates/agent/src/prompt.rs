use crate::llm::ChatPrompt;

/// Builds the advisory prompt. The instruction role is fixed and
/// parameterized only by the two selection labels; the user role carries
/// the query text verbatim, with no sanitization and no length cap.
pub fn advisory_prompt(query: &str, industry_label: &str, category_label: &str) -> ChatPrompt {
    ChatPrompt {
        system: format!(
            "You are an experienced business consultant. The person asking runs a business \
             in the {industry_label} industry and wants advice about {category_label}. \
             Give practical, specific guidance in a few short paragraphs."
        ),
        user: query.to_owned(),
    }
}
