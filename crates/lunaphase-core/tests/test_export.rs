mod common;

use lunaphase_core::batch::{export_all, survey, ExportOptions};
use lunaphase_core::config::CalibrationConfig;
use lunaphase_core::error::LunaError;
use lunaphase_core::io::naming::{output_file_name, DecimalStyle};
use lunaphase_core::measure::{MaskParameters, OverlayOptions};
use lunaphase_core::progress::{NoOpReporter, ProgressReporter};
use lunaphase_core::session::{CalibrationSession, CalibrationState};

use std::sync::atomic::{AtomicUsize, Ordering};

fn state() -> CalibrationState {
    CalibrationState {
        index: 0,
        mask: MaskParameters::new(20, 0, 0, 100).unwrap(),
        threshold: 100,
    }
}

fn options(out: &std::path::Path) -> ExportOptions {
    ExportOptions::new(out, common::SIZE)
}

#[derive(Default)]
struct CountingReporter {
    total: AtomicUsize,
    advanced: AtomicUsize,
    finished: AtomicUsize,
}

impl ProgressReporter for CountingReporter {
    fn begin(&self, total_items: usize) {
        self.total.store(total_items, Ordering::SeqCst);
    }
    fn advance(&self, _items_done: usize) {
        self.advanced.fetch_add(1, Ordering::SeqCst);
    }
    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_export_writes_one_file_per_frame() {
    let input = common::frame_dir(5);
    let out = tempfile::tempdir().unwrap();

    let summary = export_all(input.path(), &state(), &options(out.path()), &NoOpReporter).unwrap();

    assert_eq!(summary.success_count(), 5);
    assert!(summary.failures.is_empty());
    for (i, exported) in summary.exported.iter().enumerate() {
        assert_eq!(exported.frame.index, i);
        assert!(exported.output.exists());
        let expected = output_file_name(i + 1, &exported.measurement, DecimalStyle::Dot);
        assert_eq!(exported.output.file_name().unwrap().to_str().unwrap(), expected);
    }
}

#[test]
fn test_export_skips_corrupt_frame() {
    let input = common::frame_dir(4);
    common::write_corrupt(input.path(), "frame_001b.png");
    let out = tempfile::tempdir().unwrap();

    let summary = export_all(input.path(), &state(), &options(out.path()), &NoOpReporter).unwrap();

    assert_eq!(summary.success_count(), 4);
    assert_eq!(summary.failures.len(), 1);
    let (index, err) = &summary.failures[0];
    assert_eq!(*index, 2);
    assert!(matches!(err, LunaError::FrameLoad { .. }), "got {err:?}");

    let written = std::fs::read_dir(out.path()).unwrap().count();
    assert_eq!(written, 4);
}

#[test]
fn test_export_names_are_deterministic() {
    let input = common::frame_dir(6);
    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();

    let a = export_all(input.path(), &state(), &options(out_a.path()), &NoOpReporter).unwrap();
    let b = export_all(input.path(), &state(), &options(out_b.path()), &NoOpReporter).unwrap();

    let names = |s: &lunaphase_core::batch::ExportSummary| -> Vec<String> {
        s.exported
            .iter()
            .map(|e| e.output.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    };
    assert_eq!(names(&a), names(&b));
    assert!(names(&a)[0].starts_with("0001_"));
    assert!(names(&a)[5].starts_with("0006_"));
}

#[test]
fn test_export_matches_interactive_preview() {
    let input = common::frame_dir(4);
    let out = tempfile::tempdir().unwrap();
    let cfg = CalibrationConfig {
        working_size: common::SIZE,
        ..CalibrationConfig::default()
    };
    let mut session = CalibrationSession::new(&cfg).unwrap();
    session.load_directory(input.path()).unwrap();
    session.set_radius(14).unwrap();
    session.set_center_offset(2, -1).unwrap();
    session.set_crop_percent(90).unwrap();
    session.set_threshold(60).unwrap();
    let preview = session.set_index(3).unwrap().measurement;

    let opts = ExportOptions::for_session(&session, out.path());
    let summary = export_all(input.path(), &session.frozen_state(), &opts, &NoOpReporter).unwrap();

    assert_eq!(summary.exported[3].measurement, preview);
}

#[test]
fn test_options_for_session_follow_session_settings() {
    let cfg = CalibrationConfig {
        working_size: 48,
        overlay: OverlayOptions {
            opacity: 0.8,
            draw_boundary: false,
            ..OverlayOptions::default()
        },
        ..CalibrationConfig::default()
    };
    let session = CalibrationSession::new(&cfg).unwrap();

    let opts = ExportOptions::for_session(&session, "out");

    assert_eq!(opts.working_size, 48);
    assert_eq!(opts.overlay, cfg.overlay);
    assert_eq!(opts.output_dir, std::path::PathBuf::from("out"));
    assert!(!opts.annotate);
}

#[test]
fn test_export_annotated_and_plain_agree() {
    let input = common::frame_dir(2);
    let plain_out = tempfile::tempdir().unwrap();
    let annotated_out = tempfile::tempdir().unwrap();
    let annotated = ExportOptions {
        annotate: true,
        ..options(annotated_out.path())
    };

    let plain = export_all(input.path(), &state(), &options(plain_out.path()), &NoOpReporter).unwrap();
    let marked = export_all(input.path(), &state(), &annotated, &NoOpReporter).unwrap();

    for (p, m) in plain.exported.iter().zip(&marked.exported) {
        assert_eq!(p.measurement, m.measurement);
    }
    let a = image::open(&plain.exported[0].output).unwrap().to_rgb8();
    let b = image::open(&marked.exported[0].output).unwrap().to_rgb8();
    assert_ne!(a, b);
}

#[test]
fn test_export_underscore_naming() {
    let input = common::frame_dir(1);
    let out = tempfile::tempdir().unwrap();
    let opts = ExportOptions {
        naming: DecimalStyle::Underscore,
        ..options(out.path())
    };

    let summary = export_all(input.path(), &state(), &opts, &NoOpReporter).unwrap();

    let name = summary.exported[0].output.file_stem().unwrap().to_string_lossy().into_owned();
    assert!(!name.contains('.'), "got {name}");
}

#[test]
fn test_export_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let err = export_all(input.path(), &state(), &options(out.path()), &NoOpReporter).unwrap_err();

    assert!(matches!(err, LunaError::NoImagesFound(_)));
}

#[test]
fn test_export_reports_progress() {
    let input = common::frame_dir(5);
    let out = tempfile::tempdir().unwrap();
    let reporter = CountingReporter::default();

    export_all(input.path(), &state(), &options(out.path()), &reporter).unwrap();

    assert_eq!(reporter.total.load(Ordering::SeqCst), 5);
    assert_eq!(reporter.advanced.load(Ordering::SeqCst), 5);
    assert_eq!(reporter.finished.load(Ordering::SeqCst), 1);
}

#[test]
fn test_survey_matches_export() {
    let input = common::frame_dir(3);
    common::write_corrupt(input.path(), "zz_broken.jpg");
    let out = tempfile::tempdir().unwrap();

    let report = survey(input.path(), &state(), common::SIZE, &NoOpReporter).unwrap();
    let summary = export_all(input.path(), &state(), &options(out.path()), &NoOpReporter).unwrap();

    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, 3);
    for (entry, exported) in report.entries.iter().zip(&summary.exported) {
        assert_eq!(entry.measurement, exported.measurement);
    }
}

#[test]
fn test_survey_mean_lit_percent() {
    let input = common::frame_dir(3);

    let report = survey(input.path(), &state(), common::SIZE, &NoOpReporter).unwrap();

    let mean = report.mean_lit_percent().unwrap();
    let manual: f64 = report.entries.iter().map(|e| e.measurement.lit_percent).sum::<f64>() / 3.0;
    approx::assert_abs_diff_eq!(mean, manual, epsilon = 1e-12);
    // Disks grow with the frame index, so illumination does too.
    assert!(report.entries[0].measurement.lit_percent < report.entries[2].measurement.lit_percent);
}
