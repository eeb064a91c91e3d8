//! Document model and batch parsing.
//!
//! A batch is a sequence of records separated by blank lines; each
//! record is a set of whitespace-separated `name:value` entries, in any
//! order and split across any number of lines. Field order from the
//! input is preserved.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::rules::FieldRule;

/// Fields every valid document must carry. `cid` is deliberately
/// absent: a document without it is still valid.
pub const MANDATORY_FIELDS: &[&str] = &["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

/// One document: an ordered map from field name to raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    fields: IndexMap<String, String>,
}

impl Document {
    /// Creates a document from a field map.
    pub fn new(fields: IndexMap<String, String>) -> Self {
        Document { fields }
    }

    /// Parses a batch of documents from text.
    ///
    /// Records are separated by blank lines; entries within a record by
    /// any whitespace. A duplicated field name keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingSeparator` for an entry without a
    /// colon.
    pub fn parse_batch(input: &str) -> Result<Vec<Document>, ParseError> {
        let mut documents = Vec::new();

        for record in input.split("\n\n") {
            if record.trim().is_empty() {
                continue;
            }

            let mut fields = IndexMap::new();
            for entry in record.split_whitespace() {
                let (name, value) =
                    entry
                        .split_once(':')
                        .ok_or_else(|| ParseError::MissingSeparator {
                            entry: entry.to_string(),
                        })?;
                fields.insert(name.to_string(), value.to_string());
            }
            documents.push(Document { fields });
        }

        Ok(documents)
    }

    /// The raw value of `name`, when present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Read-only view of the field map.
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// Whether all mandatory fields are present and every field the
    /// document carries is accepted by its rule.
    pub fn is_valid(&self) -> bool {
        self.mandatory_fields_present() && self.all_fields_valid()
    }

    fn mandatory_fields_present(&self) -> bool {
        MANDATORY_FIELDS
            .iter()
            .all(|field| self.fields.contains_key(*field))
    }

    fn all_fields_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|(name, value)| FieldRule::for_field(name).accepts(value))
    }
}

/// Number of valid documents in a batch.
pub fn count_valid(documents: &[Document]) -> usize {
    documents.iter().filter(|document| document.is_valid()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED_BATCH: &str = "\
eyr:1972 cid:100 hcl:#18171d ecl:amb\n\
hgt:170 pid:186cm iyr:2018 byr:1926\n\
\n\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030\n\
byr:1980 hcl:#623a2f\n\
\n\
eyr:2029 ecl:blu cid:129 byr:1989\n\
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm\n\
\n\
hvz:59cm ecl:zzz eyr:2038 hcl:74454a iyr:2023\n\
pid:3556412378 byr:2007 hgt:59cm\n";

    #[test]
    fn parses_blank_line_separated_records() {
        let documents = Document::parse_batch(MIXED_BATCH).unwrap();
        assert_eq!(documents.len(), 4);
        assert_eq!(documents[1].get("pid"), Some("087499704"));
        assert_eq!(documents[1].get("cid"), None);
    }

    #[test]
    fn field_order_from_the_input_is_preserved() {
        let documents = Document::parse_batch("b:1 a:2 c:3\n").unwrap();
        let names: Vec<&String> = documents[0].fields().keys().collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn a_duplicated_field_keeps_the_last_value() {
        let documents = Document::parse_batch("byr:1980 byr:1990\n").unwrap();
        assert_eq!(documents[0].get("byr"), Some("1990"));
    }

    #[test]
    fn rejects_an_entry_without_a_separator() {
        match Document::parse_batch("byr:1980 bogus\n") {
            Err(ParseError::MissingSeparator { entry }) => assert_eq!(entry, "bogus"),
            other => panic!("expected MissingSeparator, got {:?}", other),
        }
    }

    #[test]
    fn counts_only_structurally_valid_documents() {
        let documents = Document::parse_batch(MIXED_BATCH).unwrap();
        assert_eq!(count_valid(&documents), 2);
    }

    #[test]
    fn a_missing_mandatory_field_invalidates_the_document() {
        // Everything valid except that byr is absent.
        let batch = "iyr:2012 eyr:2030 hgt:74in hcl:#623a2f ecl:grn pid:087499704\n";
        let documents = Document::parse_batch(batch).unwrap();
        assert_eq!(count_valid(&documents), 0);
    }

    #[test]
    fn a_missing_country_id_is_fine() {
        let batch =
            "byr:1980 iyr:2012 eyr:2030 hgt:74in hcl:#623a2f ecl:grn pid:087499704\n";
        let documents = Document::parse_batch(batch).unwrap();
        assert_eq!(count_valid(&documents), 1);
    }

    #[test]
    fn an_unknown_field_invalidates_the_document() {
        let batch =
            "byr:1980 iyr:2012 eyr:2030 hgt:74in hcl:#623a2f ecl:grn pid:087499704 xyz:1\n";
        let documents = Document::parse_batch(batch).unwrap();
        assert_eq!(count_valid(&documents), 0);
    }

    #[test]
    fn an_empty_batch_has_no_documents() {
        assert!(Document::parse_batch("").unwrap().is_empty());
        assert!(Document::parse_batch("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let documents = Document::parse_batch("byr:1980 cid:100\n").unwrap();
        let json = serde_json::to_string(&documents[0]).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(documents[0], back);
    }
}
