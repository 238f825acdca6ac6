use wreq::{Client, Proxy};

pub fn build_client(proxy: Option<&str>) -> Result<Client, wreq::Error> {
    let mut builder = Client::builder();
    if let Some(proxy_url) = normalize_proxy(proxy) {
        builder = builder.proxy(Proxy::all(proxy_url)?);
    }
    builder.build()
}

fn normalize_proxy(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_proxy_is_treated_as_absent() {
        assert_eq!(normalize_proxy(Some("  ")), None);
        assert_eq!(
            normalize_proxy(Some(" http://127.0.0.1:8080 ")),
            Some("http://127.0.0.1:8080")
        );
    }
}
