//! Snapshot tests for the Cohere client

#[cfg(test)]
mod snapshot_tests {
    use crate::{CohereClient, CohereConfig};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = CohereConfig {
            api_key: "test_api_key_redacted".to_string(),
            api_url: "https://api.cohere.com".to_string(),
            model: "command-r-plus".to_string(),
            temperature: 0.3,
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        api_url: "https://api.cohere.com"
        model: command-r-plus
        temperature: 0.3
        "###);
    }

    #[test]
    fn test_model_constants() {
        assert_eq!(CohereClient::COMMAND_R_PLUS, "command-r-plus");
        assert_eq!(CohereClient::COMMAND_R, "command-r");
    }
}
