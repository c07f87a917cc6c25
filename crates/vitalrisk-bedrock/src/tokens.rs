use vitalrisk_core::models::token_count::TokenCount;

/// Extract token counts from a Bedrock Converse response.
///
/// Negative counts (never sent by the service) are clamped to zero.
pub fn extract_token_usage(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: u64::try_from(usage.input_tokens).unwrap_or(0),
        output: u64::try_from(usage.output_tokens).unwrap_or(0),
    }
}
