//! API clients allowed to request tokens.
//!
//! Clients are configured through `AUTH_CLIENTS` as a `;`-separated list of
//! `client_id:secret_hash:role` triples, where `secret_hash` is an Argon2id
//! PHC string (see the `vidcat-hash-secret` binary). PHC strings contain
//! commas, hence the `;` separator.

use vidcat_core::roles::is_valid_role;

use super::secret::{parse_secret_hash, verify_secret};

/// A client allowed to exchange credentials for tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    pub client_id: String,
    pub secret_hash: String,
    pub role: String,
}

/// Parse the `AUTH_CLIENTS` format. Empty input yields no clients.
pub fn parse_clients(raw: &str) -> Result<Vec<ApiClient>, String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut parts = entry.splitn(3, ':');
            let (Some(client_id), Some(secret_hash), Some(role)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(format!("client entry '{entry}' must be client_id:secret_hash:role"));
            };
            if client_id.is_empty() {
                return Err(format!("client entry '{entry}' has an empty id"));
            }
            if parse_secret_hash(secret_hash).is_err() {
                return Err(format!(
                    "client '{client_id}' secret is not an argon2 PHC hash"
                ));
            }
            if !is_valid_role(role) {
                return Err(format!("client '{client_id}' has unknown role '{role}'"));
            }
            Ok(ApiClient {
                client_id: client_id.to_string(),
                secret_hash: secret_hash.to_string(),
                role: role.to_string(),
            })
        })
        .collect()
}

/// Find the client whose id matches and whose hash verifies `secret`.
pub fn authenticate<'a>(
    clients: &'a [ApiClient],
    client_id: &str,
    secret: &str,
) -> Result<Option<&'a ApiClient>, argon2::password_hash::Error> {
    let Some(client) = find_client(clients, client_id) else {
        return Ok(None);
    };
    if verify_secret(secret, &client.secret_hash)? {
        Ok(Some(client))
    } else {
        Ok(None)
    }
}

/// Find a client by id only (used when refreshing).
pub fn find_client<'a>(clients: &'a [ApiClient], client_id: &str) -> Option<&'a ApiClient> {
    clients.iter().find(|c| c.client_id == client_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::secret::hash_secret;

    fn entry(id: &str, secret: &str, role: &str) -> String {
        format!("{id}:{}:{role}", hash_secret(secret).unwrap())
    }

    #[test]
    fn parses_multiple_clients() {
        let raw = format!(
            "{}; {}",
            entry("studio", "s3cret", "publisher"),
            entry("app", "pw", "viewer")
        );
        let clients = parse_clients(&raw).unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].client_id, "studio");
        assert_eq!(clients[0].role, "publisher");
        assert!(clients[1].secret_hash.starts_with("$argon2id$"));
    }

    #[test]
    fn empty_input_yields_no_clients() {
        assert!(parse_clients("").unwrap().is_empty());
        assert!(parse_clients(" ; ").unwrap().is_empty());
    }

    #[test]
    fn malformed_entry_is_rejected() {
        assert!(parse_clients("studio:publisher").is_err());
        assert!(parse_clients(&entry("", "pw", "viewer")).is_err());
    }

    #[test]
    fn plaintext_secret_is_rejected() {
        let err = parse_clients("studio:pw:publisher").unwrap_err();
        assert!(err.contains("argon2"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = parse_clients(&entry("studio", "pw", "admin")).unwrap_err();
        assert!(err.contains("admin"));
    }

    #[test]
    fn authenticate_requires_matching_secret() {
        let clients = parse_clients(&entry("studio", "pw", "publisher")).unwrap();
        assert!(authenticate(&clients, "studio", "pw").unwrap().is_some());
        assert!(authenticate(&clients, "studio", "wrong").unwrap().is_none());
        assert!(authenticate(&clients, "other", "pw").unwrap().is_none());
    }
}
