use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled};

use super::OutputFormat;
use crate::types::{Channel, Member};

pub const CSV_HEADER: &str = "UID,Name,Real Name,E-mail Address,Deleted";

#[derive(Debug, Serialize, Tabled)]
pub struct MemberRow {
    #[tabled(rename = "UID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Real Name")]
    pub real_name: String,
    #[tabled(rename = "E-mail Address")]
    pub email: String,
    #[tabled(rename = "Deleted")]
    pub deleted: bool,
}

impl From<&Member> for MemberRow {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            real_name: member.real_name().to_string(),
            email: member.email().to_string(),
            deleted: member.deleted,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct ChannelRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Private")]
    pub private: bool,
}

impl From<&Channel> for ChannelRow {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone(),
            private: channel.is_private,
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Write the member report: a fixed header then one quoted line per member
pub fn write_csv<W: Write>(out: &mut W, members: &[Member]) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;

    let mut wtr = quoted_writer(out);
    for member in members {
        wtr.write_record([
            member.id.as_str(),
            member.name.as_str(),
            member.real_name(),
            member.email(),
            flag(member.deleted),
        ])?;
    }
    wtr.flush()
}

fn write_channels_csv<W: Write>(out: &mut W, channels: &[Channel]) -> io::Result<()> {
    writeln!(out, "ID,Name,Private")?;

    let mut wtr = quoted_writer(out);
    for channel in channels {
        wtr.write_record([
            channel.id.as_str(),
            channel.name.as_str(),
            flag(channel.is_private),
        ])?;
    }
    wtr.flush()
}

/// Every field quoted, embedded quotes doubled
fn quoted_writer<W: Write>(out: &mut W) -> csv::Writer<&mut W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, rows: &[T]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)
}

fn write_table<W: Write, T: Tabled>(out: &mut W, rows: &[T]) -> io::Result<()> {
    writeln!(out, "{}", Table::new(rows))
}

/// Render members in the requested format
pub fn write_members<W: Write>(
    out: &mut W,
    members: &[Member],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(out, members),
        OutputFormat::Json => {
            let rows: Vec<MemberRow> = members.iter().map(MemberRow::from).collect();
            write_json(out, &rows)
        }
        OutputFormat::Table => {
            let rows: Vec<MemberRow> = members.iter().map(MemberRow::from).collect();
            write_table(out, &rows)
        }
    }
}

/// Render channels in the requested format
pub fn write_channels<W: Write>(
    out: &mut W,
    channels: &[Channel],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Csv => write_channels_csv(out, channels),
        OutputFormat::Json => {
            let rows: Vec<ChannelRow> = channels.iter().map(ChannelRow::from).collect();
            write_json(out, &rows)
        }
        OutputFormat::Table => {
            let rows: Vec<ChannelRow> = channels.iter().map(ChannelRow::from).collect();
            write_table(out, &rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemberProfile;

    fn member(id: &str, name: &str, real_name: &str, email: &str, deleted: bool) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            deleted,
            profile: MemberProfile {
                real_name: Some(real_name.to_string()),
                email: Some(email.to_string()),
            },
        }
    }

    fn render(members: &[Member], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_members(&mut out, members, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn csv_two_members() {
        let members = vec![
            member("U1", "alice", "Alice A", "a@x.com", false),
            member("U2", "bob", "Bob B", "", true),
        ];

        let text = render(&members, OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "UID,Name,Real Name,E-mail Address,Deleted",
                r#""U1","alice","Alice A","a@x.com","False""#,
                r#""U2","bob","Bob B","","True""#,
            ]
        );
    }

    #[test]
    fn csv_empty_list_is_header_only() {
        assert_eq!(
            render(&[], OutputFormat::Csv),
            "UID,Name,Real Name,E-mail Address,Deleted\n"
        );
    }

    #[test]
    fn csv_missing_profile_fields_are_empty() {
        let bot = Member {
            id: "USLACKBOT".to_string(),
            name: "slackbot".to_string(),
            ..Default::default()
        };
        let text = render(&[bot], OutputFormat::Csv);
        assert_eq!(text.lines().nth(1), Some(r#""USLACKBOT","slackbot","","","False""#));
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        let members = vec![member("U3", "dj", "Dwayne \"The Rock\", J", "d@x.com", false)];
        let text = render(&members, OutputFormat::Csv);
        assert_eq!(
            text.lines().nth(1),
            Some(r#""U3","dj","Dwayne ""The Rock"", J","d@x.com","False""#)
        );
    }

    #[test]
    fn csv_quotes_commas_and_missing_email() {
        let mut m = member("U4", "ann", "Ann, \"A\"", "", true);
        m.profile.email = None;
        let text = render(&[m], OutputFormat::Csv);
        assert_eq!(
            text,
            "UID,Name,Real Name,E-mail Address,Deleted\n\"U4\",\"ann\",\"Ann, \"\"A\"\"\",\"\",\"True\"\n"
        );
    }

    #[test]
    fn json_rows_carry_all_columns() {
        let members = vec![member("U1", "alice", "Alice A", "a@x.com", false)];
        let value: serde_json::Value =
            serde_json::from_str(&render(&members, OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": "U1",
                "name": "alice",
                "real_name": "Alice A",
                "email": "a@x.com",
                "deleted": false
            }])
        );
    }

    #[test]
    fn table_has_column_headers() {
        let members = vec![member("U1", "alice", "Alice A", "a@x.com", false)];
        let text = render(&members, OutputFormat::Table);
        assert!(text.contains("E-mail Address"));
        assert!(text.contains("alice"));
    }

    #[test]
    fn channels_csv() {
        let channels = vec![Channel {
            id: "C1".to_string(),
            name: "general".to_string(),
            is_private: false,
            num_members: Some(3),
        }];
        let mut out = Vec::new();
        write_channels(&mut out, &channels, OutputFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID,Name,Private\n\"C1\",\"general\",\"False\"\n"
        );
    }
}
