//! The startup configuration for the server.

/// Where and how to read transactions for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// The base URL of the hosted database, e.g. "https://example.supabase.co".
    pub url: String,
    /// The API key sent with every read.
    pub api_key: String,
    /// The name of the table that holds the transactions.
    pub table_name: String,
}

/// Everything the app needs to know at startup.
///
/// Build this once from the command line and pass it to [crate::AppState::new],
/// which validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The webhook that records new transactions. `None` or an empty string
    /// selects mock mode.
    pub webhook_url: Option<String>,

    /// The table the report reads from. `None` disables the report.
    pub table: Option<TableConfig>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl AppConfig {
    /// Combine the optional table settings into a [TableConfig].
    ///
    /// The table is only configured when both the URL and the key are
    /// present and non-empty. A half-configured table is logged and ignored.
    pub fn table_from_parts(
        url: Option<String>,
        api_key: Option<String>,
        table_name: String,
    ) -> Option<TableConfig> {
        let url = url.filter(|url| !url.trim().is_empty());
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        match (url, api_key) {
            (Some(url), Some(api_key)) => Some(TableConfig {
                url,
                api_key,
                table_name,
            }),
            (None, None) => None,
            (Some(_), None) => {
                tracing::warn!("A table URL was given without an API key, the report is disabled");
                None
            }
            (None, Some(_)) => {
                tracing::warn!("A table API key was given without a URL, the report is disabled");
                None
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            table: None,
            local_timezone: "Asia/Jakarta".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, TableConfig};

    #[test]
    fn table_needs_url_and_key() {
        let got = AppConfig::table_from_parts(
            Some("https://db.example.com".to_owned()),
            Some("secret".to_owned()),
            "transactions".to_owned(),
        );

        assert_eq!(
            got,
            Some(TableConfig {
                url: "https://db.example.com".to_owned(),
                api_key: "secret".to_owned(),
                table_name: "transactions".to_owned(),
            })
        );
    }

    #[test]
    fn partial_table_settings_disable_table() {
        let cases = [
            (None, None),
            (Some("https://db.example.com"), None),
            (None, Some("secret")),
            (Some(""), Some("secret")),
            (Some("https://db.example.com"), Some(" ")),
        ];

        for (url, key) in cases {
            let got = AppConfig::table_from_parts(
                url.map(str::to_owned),
                key.map(str::to_owned),
                "transactions".to_owned(),
            );

            assert_eq!(got, None, "url {url:?} and key {key:?}");
        }
    }
}
