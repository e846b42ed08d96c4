use web_sys::Document;

pub(crate) const ASSET_BASE_ATTR: &str = "data-asset-base";

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PageConfig {
    pub(crate) asset_base: String,
}

pub(crate) fn load_page_config(document: &Document) -> PageConfig {
    PageConfig {
        asset_base: resolve_asset_base(document),
    }
}

fn resolve_asset_base(document: &Document) -> String {
    if let Some(raw) =
        option_env!("RAITOBOKKUSU_ASSET_BASE").or(option_env!("TRUNK_PUBLIC_ASSET_BASE"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return normalize_asset_base(trimmed);
        }
    }
    let Some(body) = document.body() else {
        return String::new();
    };
    body.get_attribute(ASSET_BASE_ATTR)
        .map(|value| normalize_asset_base(&value))
        .unwrap_or_default()
}

pub(crate) fn normalize_asset_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_whitespace_and_trailing_slash() {
        assert_eq!(normalize_asset_base(""), "");
        assert_eq!(normalize_asset_base("  "), "");
        assert_eq!(normalize_asset_base("/repo/"), "/repo");
        assert_eq!(
            normalize_asset_base(" https://example.org/site/ "),
            "https://example.org/site"
        );
        assert_eq!(normalize_asset_base("https://example.org"), "https://example.org");
    }
}
