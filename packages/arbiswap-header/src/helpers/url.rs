use web_sys::window;

/// Value of `key` in a `location.search` string such as `"?use=v1&x=2"`.
pub(crate) fn query_param(search: &str, key: &str) -> Option<String> {
    search.trim_start_matches('?').split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        (name == key && !value.is_empty()).then(|| value.to_owned())
    })
}

pub(crate) fn current_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    query_param(&search, key)
}

pub(crate) fn version_href(query: &str) -> String {
    format!("?use={}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_query_params() {
        assert_eq!(query_param("?use=v1", "use"), Some("v1".to_owned()));
        assert_eq!(query_param("?a=1&use=v2&b", "use"), Some("v2".to_owned()));
        assert_eq!(query_param("use=v1", "use"), Some("v1".to_owned()));
    }

    #[test]
    fn missing_or_empty_params_are_none() {
        assert_eq!(query_param("", "use"), None);
        assert_eq!(query_param("?used=v1", "use"), None);
        assert_eq!(query_param("?use=", "use"), None);
        assert_eq!(query_param("?use", "use"), None);
    }

    #[test]
    fn builds_version_links() {
        assert_eq!(version_href("v1"), "?use=v1");
    }
}
