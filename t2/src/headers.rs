use crate::date;
use crate::page::Page;
use crate::schema::Region;
use crate::Result;
use rand::RngCore;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION,
    CACHE_CONTROL, PRAGMA, REFERER, USER_AGENT,
};

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
pub(crate) const HEADER_LOCAL_TIME: &str = "x-user-local-time";

const SEC_CH_UA: &str = r#""Google Chrome";v="131", "Chromium";v="131", "Not_A Brand";v="24""#;
const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const REQUEST_ID_BYTES: usize = 20;

/// Per-request header set: the fixed browser fingerprint the carrier
/// expects, the bearer credential, a fresh correlation id and the
/// client-local timestamp.
#[derive(Clone)]
pub(crate) struct Fingerprint {
    auth_code: String,
    region: Region,
}

impl Fingerprint {
    pub(crate) fn new(auth_code: String, region: Region) -> Self {
        Self { auth_code, region }
    }

    pub(crate) fn headers(&self, page: Page) -> Result<HeaderMap> {
        let referer = format!("https://{}.t2.ru/{page}", self.region);

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("zstd"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7"),
        );
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&self.auth_code)?);
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert("priority", HeaderValue::from_static("u=1, i"));
        headers.insert(REFERER, HeaderValue::from_str(&referer)?);
        headers.insert("sec-ch-ua", HeaderValue::from_static(SEC_CH_UA));
        headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
        headers.insert("sec-ch-ua-platform", HeaderValue::from_static("Windows"));
        headers.insert("tele2-user-agent", HeaderValue::from_static("web"));
        headers.insert(USER_AGENT, HeaderValue::from_static(UA));
        headers.insert(HEADER_REQUEST_ID, HeaderValue::from_str(&request_id())?);
        headers.insert(
            HEADER_LOCAL_TIME,
            HeaderValue::from_str(&date::local_time()?)?,
        );

        Ok(headers)
    }
}

fn request_id() -> String {
    let mut bytes = [0u8; REQUEST_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
