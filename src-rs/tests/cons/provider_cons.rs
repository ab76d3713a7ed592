use crate::cons::provider_cons::ProviderKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_exact_tags() {
        assert_eq!(ProviderKind::from_name("openai"), Some(ProviderKind::OpenAI));
        assert_eq!(ProviderKind::from_name("gpustack"), Some(ProviderKind::GpuStack));
        assert_eq!(ProviderKind::from_name("azure"), Some(ProviderKind::Azure));
    }

    #[test]
    fn from_name_rejects_case_whitespace_and_aliases() {
        assert_eq!(ProviderKind::from_name("OpenAI"), None);
        assert_eq!(ProviderKind::from_name(" gpustack "), None);
        assert_eq!(ProviderKind::from_name("azure_openai"), None);
        assert_eq!(ProviderKind::from_name("anthropic"), None);
        assert_eq!(ProviderKind::from_name(""), None);
    }

    #[test]
    fn display_matches_config_name() {
        for kind in [ProviderKind::OpenAI, ProviderKind::GpuStack, ProviderKind::Azure] {
            assert_eq!(kind.to_string(), kind.provider_name());
            assert_eq!(ProviderKind::from_name(&kind.to_string()), Some(kind));
        }
    }
}
