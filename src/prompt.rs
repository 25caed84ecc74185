const CHAT_PREAMBLE: &str = "You are OceanGPT, a marine science expert. \
Please answer the following question about marine science or ocean-related topics:";

// marine-science framing around the user question
pub fn format_chat_prompt(prompt: &str) -> String {
    format!("{CHAT_PREAMBLE}\n\nQuestion: {prompt}\n\nAnswer:")
}

// text-generation upstreams echo their input; drop the first copy and trim,
// otherwise return the output untouched
pub fn strip_echo(generated: &str, wrapped: &str) -> String {
    if generated.contains(wrapped) {
        generated.replacen(wrapped, "", 1).trim().to_string()
    } else {
        generated.to_string()
    }
}
