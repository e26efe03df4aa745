use std::fs;
use std::path::Path;

use transcript_resync::{
    AlignerConfig, DropReason, ResyncError, ResyncJob, SegmentOutcome, SubtitleResyncerBuilder,
};

const REFERENCE: &str = "The cat sat on the mat.\nIt was happy.\n";

const SUBTITLES: &str = "\
1
00:00:00,000 --> 00:00:02,000
The cat sat on the mat

2
00:00:02,000 --> 00:00:04,000
It was happy
";

const EXPECTED: &str = "\
1
00:00:00,000 --> 00:00:02,000
The cat sat on the mat.

2
00:00:02,000 --> 00:00:04,000
It was happy.
";

fn job_in(dir: &Path) -> ResyncJob {
    ResyncJob {
        original_text_path: dir.join("original.txt"),
        srt_path: dir.join("auto.srt"),
        output_txt_path: dir.join("aligned.txt"),
        output_srt_path: dir.join("aligned.srt"),
    }
}

fn write_inputs(job: &ResyncJob, reference: &str, subtitles: &str) {
    fs::write(&job.original_text_path, reference).expect("write reference");
    fs::write(&job.srt_path, subtitles).expect("write subtitles");
}

#[test]
fn end_to_end_cat_and_mat() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    write_inputs(&job, REFERENCE, SUBTITLES);

    let resyncer = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build");
    let run = resyncer.run(&job).expect("run");

    assert_eq!(run.rendered, EXPECTED);
    assert_eq!(
        fs::read_to_string(&job.output_txt_path).expect("read output"),
        EXPECTED
    );
    assert_eq!(run.alignment.blocks.len(), 2);
    assert!(run.extracted.dropped.is_empty());
}

#[test]
fn subtitle_output_is_byte_identical_copy() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    write_inputs(
        &job,
        "Ünïcödé - text, here! And more.",
        "1\na --> b\nÜnïcödé - text\n\n2\nc --> d\nAnd more\n",
    );

    SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .expect("run");

    let txt = fs::read(&job.output_txt_path).expect("read txt");
    let srt = fs::read(&job.output_srt_path).expect("read srt");
    assert_eq!(txt, srt);
    assert_eq!(
        String::from_utf8(txt).expect("utf8"),
        "1\na --> b\nÜnïcödé - text,\n\n2\nc --> d\nAnd more.\n"
    );
}

#[test]
fn existing_outputs_are_overwritten() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    write_inputs(&job, REFERENCE, SUBTITLES);
    let stale = "x".repeat(4096);
    fs::write(&job.output_txt_path, &stale).expect("seed txt");
    fs::write(&job.output_srt_path, &stale).expect("seed srt");

    SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .expect("run");

    assert_eq!(fs::read_to_string(&job.output_srt_path).expect("read"), EXPECTED);
}

#[test]
fn dropped_and_unmatched_segments_are_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    let subtitles = "\
1
00:00:00,000 --> 00:00:01,000
The cat sat on the mat

2
00:00:01,000 --> 00:00:02,000

3
00:00:02,000 --> 00:00:03,000
zzz

4
00:00:03,000 --> 00:00:04,000
It was happy
";
    write_inputs(&job, REFERENCE, subtitles);

    let run = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .expect("run");

    assert_eq!(run.extracted.dropped.len(), 1);
    assert_eq!(run.extracted.dropped[0].index, Some(2));
    assert_eq!(run.extracted.dropped[0].reason, DropReason::MissingText);

    let indices: Vec<u64> = run.alignment.blocks.iter().map(|b| b.index).collect();
    assert_eq!(indices, [1, 4]);
    assert!(run
        .alignment
        .outcomes
        .iter()
        .any(|o| matches!(o, SegmentOutcome::Unmatched { index: 3, .. })));
}

#[test]
fn record_without_timestamp_inherits_previous_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    write_inputs(
        &job,
        REFERENCE,
        "1\n00:00:00,000 --> 00:00:02,000\nThe cat sat on the mat\n\n2\nIt was happy\n",
    );

    let run = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .expect("run");

    assert!(run.extracted.dropped.is_empty());
    assert_eq!(
        run.rendered,
        "1\n00:00:00,000 --> 00:00:02,000\nThe cat sat on the mat.\n\n2\n00:00:00,000 --> 00:00:02,000\nIt was happy.\n"
    );
}

#[test]
fn empty_inputs_write_empty_outputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    write_inputs(&job, "", "");

    let run = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .expect("run");

    assert_eq!(run.rendered, "");
    assert_eq!(fs::read(&job.output_txt_path).expect("read").len(), 0);
    assert_eq!(fs::read(&job.output_srt_path).expect("read").len(), 0);
}

#[test]
fn missing_subtitle_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    fs::write(&job.original_text_path, REFERENCE).expect("write reference");

    let err = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .unwrap_err();

    match err {
        ResyncError::Io { path, .. } => assert_eq!(path, job.srt_path),
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert!(!job.output_txt_path.exists());
    assert!(!job.output_srt_path.exists());
}

#[test]
fn non_utf8_reference_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let job = job_in(dir.path());
    fs::write(&job.original_text_path, [0xff, 0xfe, 0x00, 0x41]).expect("write reference");
    fs::write(&job.srt_path, SUBTITLES).expect("write subtitles");

    let err = SubtitleResyncerBuilder::new(AlignerConfig::default())
        .build()
        .expect("build")
        .run(&job)
        .unwrap_err();
    assert!(matches!(err, ResyncError::Io { .. }));
}
