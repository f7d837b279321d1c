//! Command execution against a credential client.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;

use keystash_core::credentials::{
    CredentialClient, CredentialDeleter, CredentialLister, CredentialReader, CredentialUpdater,
    CredentialWriter, DeleteRequest, ListEntry, ListRequest, ReadRequest, UpdateRequest,
    WriteRequest,
};

use crate::Command;

/// Runs one command and prints its outcome to `out`. Secrets missing from
/// the command line are read as one line from `input`.
pub fn execute(
    command: &Command,
    namespace: &str,
    client: &dyn CredentialClient,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Write { identifier, secret } => {
            let secret = resolve_secret(secret.as_deref(), input)?;
            let request = WriteRequest::new(namespace, identifier.as_str(), secret)?;
            client.write(&request).context("Write failed")?;
            writeln!(out, "Write success: saved '{}'", identifier)?;
        }
        Command::Read { identifier } => {
            let request = ReadRequest::new(namespace, identifier.as_str())?;
            let result = match client.read(&request) {
                Ok(result) => result,
                Err(err) if err.is_not_found() => {
                    bail!("Read failed: no secret stored under '{}'", identifier)
                }
                Err(err) => return Err(err).context("Read failed"),
            };
            writeln!(out, "{}", result.secret.to_text_lossy())?;
        }
        Command::Update { identifier, secret } => {
            let secret = resolve_secret(secret.as_deref(), input)?;
            let request = UpdateRequest::new(namespace, identifier.as_str(), secret)?;
            client.update(&request).context("Update failed")?;
            writeln!(out, "Update success: '{}' now has a new value", identifier)?;
        }
        Command::Delete { identifier } => {
            let request = DeleteRequest::new(namespace, identifier.as_str())?;
            client.delete(&request).context("Delete failed")?;
            writeln!(out, "Delete success: removed '{}'", identifier)?;
        }
        Command::List { json } => {
            let request = ListRequest::new(namespace)?;
            // A namespace that cannot be listed is shown as empty.
            let entries = client.list(&request).unwrap_or_else(|err| {
                warn!(namespace, error = %err, "Listing failed, showing no entries");
                Vec::new()
            });
            print_entries(&entries, *json, out)?;
        }
    }

    Ok(())
}

fn resolve_secret(secret: Option<&str>, input: &mut dyn BufRead) -> Result<String> {
    if let Some(secret) = secret {
        return Ok(secret.to_string());
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read secret from stdin")?;
    let secret = line.trim_end_matches(['\r', '\n']);
    if secret.is_empty() {
        bail!("No secret given on the command line or stdin");
    }
    Ok(secret.to_string())
}

fn print_entries(entries: &[ListEntry], json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(out, "No secrets stored")?;
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|entry| entry.identifier.chars().count())
        .max()
        .unwrap_or(0)
        .max("IDENTIFIER".len());
    writeln!(out, "{:<width$}  SECRET", "IDENTIFIER", width = width)?;
    for entry in entries {
        writeln!(
            out,
            "{:<width$}  {}",
            entry.identifier,
            entry.secret,
            width = width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use keystash_core::config::KeychainConfig;
    use keystash_core::keychain::{InMemoryKeychain, KeychainClient};

    fn client() -> KeychainClient {
        KeychainClient::with_store(Arc::new(InMemoryKeychain::new()), &KeychainConfig::default())
    }

    fn run(client: &KeychainClient, command: Command) -> Result<String> {
        run_with_input(client, command, "")
    }

    fn run_with_input(client: &KeychainClient, command: Command, input: &str) -> Result<String> {
        let mut out = Vec::new();
        execute(&command, "svc", client, &mut input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn write(identifier: &str, secret: &str) -> Command {
        Command::Write {
            identifier: identifier.to_string(),
            secret: Some(secret.to_string()),
        }
    }

    fn read(identifier: &str) -> Command {
        Command::Read {
            identifier: identifier.to_string(),
        }
    }

    #[test]
    fn write_then_read_prints_secret() {
        let client = client();
        let output = run(&client, write("alice", "hunter2")).unwrap();
        assert!(output.starts_with("Write success"));

        let output = run(
            &client,
            Command::Read {
                identifier: "alice".to_string(),
            },
        )
        .unwrap();
        assert_eq!(output, "hunter2\n");
    }

    #[test]
    fn read_of_missing_secret_fails() {
        let err = run(
            &client(),
            Command::Read {
                identifier: "nobody".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("no secret stored under 'nobody'"));
    }

    #[test]
    fn missing_secret_is_read_from_input() {
        let client = client();
        let command = Command::Write {
            identifier: "alice".to_string(),
            secret: None,
        };
        run_with_input(&client, command, "from-stdin\r\n").unwrap();

        assert_eq!(run(&client, read("alice")).unwrap(), "from-stdin\n");
    }

    #[test]
    fn empty_input_without_secret_is_rejected() {
        let command = Command::Update {
            identifier: "alice".to_string(),
            secret: None,
        };
        let err = run_with_input(&client(), command, "\n").unwrap_err();
        assert!(err.to_string().contains("No secret given"));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(run(&client(), write("", "pw")).is_err());
    }

    #[test]
    fn failed_list_is_shown_as_empty() {
        let output = run(&client(), Command::List { json: false }).unwrap();
        assert_eq!(output, "No secrets stored\n");

        let output = run(&client(), Command::List { json: true }).unwrap();
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn list_prints_table_and_json() {
        let client = client();
        run(&client, write("alice", "a-pw")).unwrap();
        run(&client, write("bob", "b-pw")).unwrap();

        let table = run(&client, Command::List { json: false }).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("IDENTIFIER"));
        assert!(lines[1].starts_with("alice") && lines[1].ends_with("a-pw"));
        assert!(lines[2].starts_with("bob") && lines[2].ends_with("b-pw"));

        let json = run(&client, Command::List { json: true }).unwrap();
        let parsed: Vec<ListEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].namespace, "svc");
    }

    #[test]
    fn update_and_delete_round_trip() {
        let client = client();
        run(&client, write("alice", "old")).unwrap();
        run(
            &client,
            Command::Update {
                identifier: "alice".to_string(),
                secret: Some("new".to_string()),
            },
        )
        .unwrap();
        let output = run(
            &client,
            Command::Read {
                identifier: "alice".to_string(),
            },
        )
        .unwrap();
        assert_eq!(output, "new\n");

        let output = run(
            &client,
            Command::Delete {
                identifier: "alice".to_string(),
            },
        )
        .unwrap();
        assert!(output.starts_with("Delete success"));
        assert!(run(
            &client,
            Command::Delete {
                identifier: "alice".to_string()
            }
        )
        .is_err());
    }
}
