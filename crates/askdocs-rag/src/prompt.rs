//! Grounding prompt assembly

/// Assemble the grounding prompt for a query and its retrieved passages
///
/// Pure function: no I/O, deterministic given its inputs. Passages render as
/// a bulleted list under a fixed instructional template that keeps the
/// generator grounded in the supplied context.
pub fn build_prompt(query: &str, passages: &[String]) -> String {
    let context = passages
        .iter()
        .map(|text| format!("• {}", text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Context from internal documents:\n\
         {context}\n\
         \n\
         User Question: {query}\n\
         \n\
         Instructions:\n\
         1. Analyze the question and context\n\
         2. If the answer exists in the context, summarize it\n\
         3. If information is missing, state that you don't know\n\
         4. Use a professional business tone\n\
         5. Never invent information\n"
    )
}
