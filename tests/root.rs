// SPDX-License-Identifier: MPL-2.0
//! Free functions against the process-wide root, configured from a file.

use iced_toaster::config::{self, ToasterConfig};
use iced_toaster::toast::{Lifetime, Position, ToastOptions, ToastType};
use iced_toaster::{Error, ToastStore};
use tempfile::tempdir;

#[test]
fn mounted_root_serves_free_functions_with_file_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toaster.toml");
    std::fs::write(
        &path,
        r#"
position = "bottom-center"
gutter = 12.0

[toast_options]
duration = 1500
"#,
    )
    .expect("Failed to write config file");

    let loaded: ToasterConfig = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(
        iced_toaster::toast("early", ToastOptions::new()),
        Err(Error::NoActiveToaster)
    );

    let store = ToastStore::new(loaded);
    let guard = iced_toaster::mount(store.clone()).expect("Failed to mount root");

    let id = iced_toaster::success("Saved", ToastOptions::new()).unwrap();
    let toast = store.get(&id).unwrap();
    assert_eq!(toast.kind(), ToastType::Success);
    assert_eq!(toast.position(), Position::BottomCenter);
    assert_eq!(toast.duration(), Lifetime::from_millis(1500));

    let loading = iced_toaster::loading("Working", ToastOptions::new().persistent()).unwrap();
    assert!(store.get(&loading).unwrap().duration().is_infinite());

    iced_toaster::dismiss(None).unwrap();
    assert!(store.toasts().iter().all(|t| !t.visible()));
    iced_toaster::remove(None).unwrap();
    assert!(store.is_empty());

    drop(guard);
    assert_eq!(iced_toaster::dismiss(None), Err(Error::NoActiveToaster));

    dir.close().expect("Failed to close temporary directory");
}
