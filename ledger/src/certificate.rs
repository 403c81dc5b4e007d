//! Certificate projection — a shareable summary of a verification record.

use chrono::DateTime;
use metasignet_types::{Timestamp, VerificationRecord};
use serde::Serialize;
use std::fmt;

/// A human-presentable projection of one verification record.
///
/// Pure function of the record: no I/O, no side effects, and the stored
/// fingerprint is never altered — only truncated for display.
#[derive(Clone, Debug, Serialize)]
pub struct Certificate {
    /// Truncated fingerprint for display.
    pub fingerprint: String,
    pub attester: String,
    pub creation_type: String,
    pub status: String,
    pub creation_context: Option<String>,
    pub vouch_count: u32,
    pub content_uri: String,
    pub created_at: String,
    /// Relative path of the shareable verification page.
    pub verify_path: String,
}

impl Certificate {
    pub fn from_record(record: &VerificationRecord) -> Self {
        let short = record.fingerprint.short().to_string();
        Self {
            fingerprint: short.clone(),
            attester: record.attester.to_string(),
            creation_type: record.creation_type.label().to_string(),
            status: record.status.label().to_string(),
            creation_context: record.creation_context.clone(),
            vouch_count: record.vouch_count(),
            content_uri: record.content_uri.clone(),
            created_at: format_timestamp(record.created_at),
            verify_path: format!("verify/{short}"),
        }
    }
}

/// Render epoch seconds as `YYYY-MM-DD HH:MM:SS UTC`, falling back to the
/// raw second count when the value is outside chrono's range.
fn format_timestamp(ts: Timestamp) -> String {
    match DateTime::from_timestamp(ts.as_secs() as i64, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{}s since epoch", ts.as_secs()),
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Content Attestation Certificate")?;
        writeln!(f, "  Fingerprint:   {}", self.fingerprint)?;
        writeln!(f, "  Attested by:   {}", self.attester)?;
        writeln!(f, "  Creation:      {}", self.creation_type)?;
        writeln!(f, "  Trust tier:    {}", self.status)?;
        if let Some(context) = &self.creation_context {
            writeln!(f, "  Context:       {context}")?;
        }
        writeln!(f, "  Vouches:       {}", self.vouch_count)?;
        writeln!(f, "  Content:       {}", self.content_uri)?;
        writeln!(f, "  Attested at:   {}", self.created_at)?;
        write!(f, "  Verify at:     {}", self.verify_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metasignet_types::{
        ActorId, ContentFingerprint, CreationType, TrustStatus, Vouch,
    };

    fn record() -> VerificationRecord {
        VerificationRecord {
            fingerprint: ContentFingerprint::new(
                "49bb273ad623f1e54bbb0b3cfbae2e8e7f06cfd2d1867fae0bbd4e0bfa1cbd37:",
            ),
            content_uri: "at://did:plc:abc/app.bsky.feed.post/1".to_string(),
            attester: ActorId::new("alice.example"),
            creation_type: CreationType::HumanCreated,
            creation_context: Some("oil on canvas".to_string()),
            status: TrustStatus::CommunityVouched,
            vouches: vec![
                Vouch {
                    voucher: ActorId::new("bob"),
                    timestamp: Timestamp::new(1_700_000_100),
                },
                Vouch {
                    voucher: ActorId::new("carol"),
                    timestamp: Timestamp::new(1_700_000_200),
                },
                Vouch {
                    voucher: ActorId::new("dave"),
                    timestamp: Timestamp::new(1_700_000_300),
                },
            ],
            created_at: Timestamp::new(1_700_000_000),
        }
    }

    #[test]
    fn projects_labels_and_truncated_fingerprint() {
        let cert = Certificate::from_record(&record());
        assert_eq!(cert.fingerprint, "49bb273ad623f1e5");
        assert_eq!(cert.fingerprint.len(), 16);
        assert_eq!(cert.creation_type, "Human-created");
        assert_eq!(cert.status, "Community-vouched");
        assert_eq!(cert.vouch_count, 3);
        assert_eq!(cert.verify_path, "verify/49bb273ad623f1e5");
    }

    #[test]
    fn projection_leaves_record_untouched() {
        let rec = record();
        let before = rec.clone();
        let _cert = Certificate::from_record(&rec);
        assert_eq!(rec, before);
    }

    #[test]
    fn formats_created_at_as_utc_date() {
        let cert = Certificate::from_record(&record());
        // 1_700_000_000 = 2023-11-14 22:13:20 UTC.
        assert_eq!(cert.created_at, "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn display_renders_all_fields() {
        let cert = Certificate::from_record(&record());
        let text = cert.to_string();
        assert!(text.contains("49bb273ad623f1e5"));
        assert!(text.contains("Human-created"));
        assert!(text.contains("Community-vouched"));
        assert!(text.contains("oil on canvas"));
        assert!(text.contains("verify/49bb273ad623f1e5"));
    }

    #[test]
    fn serializes_to_json() {
        let cert = Certificate::from_record(&record());
        let json = serde_json::to_value(&cert).unwrap();
        assert_eq!(json["fingerprint"], "49bb273ad623f1e5");
        assert_eq!(json["vouch_count"], 3);
        assert_eq!(json["status"], "Community-vouched");
    }
}
