use rand::seq::IndexedRandom;
use rand::Rng;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

#[derive(Clone, Debug)]
pub struct PlatformInfo {
    pub user_agent_platform: &'static str,
    pub sec_ch_ua_platform: &'static str,
}

static PLATFORMS: [PlatformInfo; 3] = [
    PlatformInfo {
        user_agent_platform: "Windows NT 10.0; Win64; x64",
        sec_ch_ua_platform: "Windows",
    },
    PlatformInfo {
        user_agent_platform: "Macintosh; Intel Mac OS X 10_15_7",
        sec_ch_ua_platform: "macOS",
    },
    PlatformInfo {
        user_agent_platform: "X11; Linux x86_64",
        sec_ch_ua_platform: "Linux",
    },
];

pub fn get_random_platform_info() -> PlatformInfo {
    let mut rng = rand::rng();
    PLATFORMS.choose(&mut rng).unwrap_or(&PLATFORMS[0]).to_owned()
}

pub fn get_random_user_agent(platform_info: &PlatformInfo) -> String {
    let mut rng = rand::rng();
    let chrome_version = 110 + rng.random_range(0..30);

    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36",
        platform_info.user_agent_platform, chrome_version
    )
}

/// Desktop browser headers; the portal serves an error page to bare clients.
pub fn browser_headers() -> HeaderMap {
    let platform = get_random_platform_info();
    let mut headers = HeaderMap::new();

    if let Ok(value) = HeaderValue::from_str(&get_random_user_agent(&platform)) {
        headers.insert(USER_AGENT, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("\"{}\"", platform.sec_ch_ua_platform)) {
        headers.insert("sec-ch-ua-platform", value);
    }
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-IN,en;q=0.9"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_platform() {
        let platform = get_random_platform_info();
        let ua = get_random_user_agent(&platform);
        assert!(ua.starts_with("Mozilla/5.0 ("));
        assert!(ua.contains(platform.user_agent_platform));
    }

    #[test]
    fn headers_are_complete() {
        let headers = browser_headers();
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key("sec-ch-ua-platform"));
        assert!(headers.contains_key(ACCEPT));
    }
}
