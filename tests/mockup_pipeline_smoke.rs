use std::path::PathBuf;

use shotframe::{
    inspect::inspect_file,
    output::{Manifest, MANIFEST_FILE},
    pipeline, FontBook, SceneSet, ShotConfig,
};

#[test]
fn builtin_mockups_written_at_canvas_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ShotConfig::default();
    cfg.output.mockup_dir = dir.path().join("mockups");

    let scenes = SceneSet::builtin();
    let records = pipeline::generate_mockups(&cfg, &scenes, &FontBook::builtin()).expect("mockups render");
    assert_eq!(records.len(), 4);

    for (record, scene) in records.iter().zip(&scenes.mockups) {
        assert_eq!(record.path, cfg.output.mockup_dir.join(&scene.file));
        let stats = inspect_file(&record.path).unwrap();
        assert_eq!((stats.width, stats.height), (1290, 2796), "{}", scene.file);
        assert!(!stats.is_uniform(), "{} came out blank", scene.file);
        // black canvas dominates every mockup
        assert!(stats.black_pct > 50.0, "{}: {stats}", scene.file);
    }

    let manifest = Manifest::load(&cfg.output.mockup_dir.join(MANIFEST_FILE)).unwrap();
    assert_eq!((manifest.canvas.width, manifest.canvas.height), (1290, 2796));
    let names: Vec<PathBuf> = manifest.outputs.iter().map(|o| o.path.file_name().unwrap().into()).collect();
    assert_eq!(
        names,
        ["1-reading-progress.png", "2-text-input.png", "3-wpm-adjustment.png", "4-reading-different.png"]
            .map(PathBuf::from)
    );
    assert_eq!(manifest.outputs[0].scene, "Reading in progress");
}

#[test]
fn manifest_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ShotConfig::default();
    cfg.output.mockup_dir = dir.path().to_path_buf();
    cfg.output.manifest = false;

    let mut scenes = SceneSet::builtin();
    scenes.mockups.truncate(1);
    pipeline::generate_mockups(&cfg, &scenes, &FontBook::builtin()).unwrap();
    assert!(dir.path().join("1-reading-progress.png").exists());
    assert!(!dir.path().join(MANIFEST_FILE).exists());
}

#[test]
fn invalid_focus_index_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ShotConfig::default();
    cfg.output.mockup_dir = dir.path().to_path_buf();

    let mut scenes = SceneSet::builtin();
    scenes.mockups.truncate(1);
    for element in &mut scenes.mockups[0].elements {
        if let shotframe::scene::Element::FocusWord { focus, .. } = element {
            *focus = 40;
        }
    }
    let err = pipeline::generate_mockups(&cfg, &scenes, &FontBook::builtin()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("1-reading-progress.png"), "{msg}");
    assert!(msg.contains("focus index 40"), "{msg}");
}
