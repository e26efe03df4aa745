use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript_resync::{
    compute_report, AlignerConfig, Meta, ResyncJob, ResyncRun, SubtitleResyncerBuilder,
};

#[path = "transcript_resync/json_report_formatter.rs"]
mod json_report_formatter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "transcript_resync")]
#[command(about = "Re-sync a corrected transcript onto an existing subtitle file's timings")]
struct Args {
    /// Corrected reference transcript.
    original_text: PathBuf,
    /// Subtitle file whose index and timestamps are kept.
    srt_file: PathBuf,
    /// Where the aligned text is written.
    output_txt: PathBuf,
    /// Where the copy of the aligned text is written.
    output_srt: PathBuf,
    /// Also write a JSON report of matched, unmatched and dropped segments.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let job = ResyncJob {
        original_text_path: args.original_text,
        srt_path: args.srt_file,
        output_txt_path: args.output_txt,
        output_srt_path: args.output_srt,
    };

    let resyncer = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .map_err(|err| format!("Failed to build resyncer: {err}"))?;
    let resync_run = resyncer.run(&job).map_err(|err| err.to_string())?;

    println!("Formatted text saved to: {}", job.output_txt_path.display());
    println!("Subtitle file saved to: {}", job.output_srt_path.display());

    if let Some(report_path) = args.report.as_ref() {
        let meta = build_meta(&job, &resync_run);
        let report = compute_report(meta, &resync_run.extracted, &resync_run.alignment)
            .map_err(|err| format!("Failed to compute report: {err}"))?;
        json_report_formatter::write_report(report_path, &report)?;
        println!("Report saved to: {}", report_path.display());
    }
    Ok(())
}

fn build_meta(job: &ResyncJob, resync_run: &ResyncRun) -> Meta {
    Meta {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        reference_path: job.original_text_path.to_string_lossy().into_owned(),
        subtitle_path: job.srt_path.to_string_lossy().into_owned(),
        reference_char_count: resync_run.reference_char_count,
        segment_count: u32::try_from(resync_run.extracted.segments.len()).unwrap_or(u32::MAX),
    }
}
