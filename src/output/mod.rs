use console::style;

use crate::store::RecordSummary;
use crate::transcribe::VideoRecord;
use crate::utils::format_duration;

/// Print a full record with its transcription to the console
pub fn print_record(record: &VideoRecord) {
    println!("{}", style(&record.title).bold());
    println!("  Video ID:    {}", record.id);
    println!("  URL:         {}", record.url);
    println!("  Channel:     {}", record.channel);
    println!("  Author:      {}", record.author);
    println!("  Uploaded:    {}", record.upload_date);
    println!("  Duration:    {}", format_duration(record.duration));
    println!("  Transcribed: {}", record.created_at);
    println!();
    println!("{}", record.transcription);
}

/// Print the recent-transcripts listing, newest first
pub fn print_recent(records: &[RecordSummary]) {
    if records.is_empty() {
        println!("No transcripts found.");
        return;
    }

    for record in records {
        println!(
            "{}  {}  {} ({})",
            style(&record.id).cyan(),
            record.created_at,
            record.title,
            record.author
        );
    }
}
