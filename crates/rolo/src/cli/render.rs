use console::style;
use roloapp::commands::{CmdMessage, MessageLevel};
use roloapp::model::PersonRecord;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", style(&message.content).dim()),
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Error => println!("{}", style(&message.content).red()),
        }
    }
}

pub(super) fn print_records(records: &[PersonRecord], show_private: bool) {
    for (i, line) in record_lines(records, show_private).iter().enumerate() {
        println!("{} {}", style(format!("{}.", i + 1)).yellow(), line);
    }
}

fn record_lines(records: &[PersonRecord], show_private: bool) -> Vec<String> {
    records
        .iter()
        .map(|record| record.display_text(show_private))
        .collect()
}
