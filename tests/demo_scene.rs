use std::path::PathBuf;
use std::process::Command;
use world_bbox::{report, scene::Scene};

const BED_FRAME_REPORT: &str = "Min corner: <Vector (0.3260, 1.6005, 0.0000)>\n\
                                Max corner: <Vector (3.6740, 4.3995, 0.9000)>";

fn bedroom_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/bedroom.json")
}

#[test]
fn bedroom_scene_reports_bed_frame() {
    let scene = Scene::load(bedroom_path()).unwrap();
    assert_eq!(scene.objects.len(), 2);

    let object = scene.active().unwrap();
    assert_eq!(object.name, "bed frame");

    let bbox = object.world_bbox().unwrap();
    assert_eq!(report::render(&bbox), BED_FRAME_REPORT);
}

#[test]
fn bedroom_lamp_uses_matrix() {
    let scene = Scene::load(bedroom_path()).unwrap();
    let lamp = scene.objects.iter().find(|obj| obj.name == "lamp").unwrap();
    let bbox = lamp.world_bbox().unwrap();
    assert_eq!(
        report::render(&bbox),
        "Min corner: <Vector (-3.0000, 1.0000, 0.0000)>\n\
         Max corner: <Vector (-2.8000, 1.2000, 1.5000)>"
    );
}

#[test]
fn missing_scene_file_is_io_error() {
    let err = Scene::load(bedroom_path().with_file_name("no_such_scene.json")).unwrap_err();
    assert!(matches!(err, world_bbox::BBoxError::Io(_)));
}

#[test]
fn binary_prints_only_report_on_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_world-bbox"))
        .arg(bedroom_path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{BED_FRAME_REPORT}\n")
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("bed frame"));
}

#[test]
fn binary_without_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_world-bbox")).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
