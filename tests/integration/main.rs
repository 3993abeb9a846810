//! Integration tests for lyriflow
//!
//! Every test runs against a temporary cache directory seeded through the
//! library, so no request ever reaches LRCLIB.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use lyriflow::cache::{CacheKey, CacheRecord};
    use lyriflow::lyrics::LyricLine;
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    const TITLE: &str = "Song";
    const ARTIST: &str = "Artist";
    const ALBUM: &str = "Album";

    fn lyriflow(home: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("lyriflow");
        cmd.env("LYRIFLOW_CONFIG", home.path().join("config.toml"))
            .env("LYRIFLOW_CACHE_DIR", cache_dir(home))
            .env_remove("RUST_LOG");
        cmd
    }

    fn cache_dir(home: &TempDir) -> std::path::PathBuf {
        home.path().join("cache")
    }

    fn seed(home: &TempDir, record: &CacheRecord) -> std::path::PathBuf {
        let dir = cache_dir(home);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CacheKey::derive(TITLE, ARTIST, ALBUM).record_file_name());
        std::fs::write(&path, serde_json::to_string(record).unwrap()).unwrap();
        path
    }

    fn seed_lyrics(home: &TempDir) -> std::path::PathBuf {
        seed(
            home,
            &CacheRecord::found(
                None,
                vec![
                    LyricLine::new(1.0, "Hello"),
                    LyricLine::new(3.0, ""),
                    LyricLine::new(5.5, "World"),
                ],
            ),
        )
    }

    fn get_at(home: &TempDir, position: &str) -> assert_cmd::assert::Assert {
        lyriflow(home)
            .args(["get", "-t", TITLE, "-a", ARTIST, "-A", ALBUM, "-p", position])
            .assert()
    }

    fn dir_is_empty(path: &Path) -> bool {
        std::fs::read_dir(path).unwrap().next().is_none()
    }

    #[test]
    fn help_displays() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Synchronized lyrics"));
    }

    #[test]
    fn version_displays() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("lyriflow version "));
    }

    #[test]
    fn version_command() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("lyriflow version "));
    }

    #[test]
    fn get_requires_track_fields() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .args(["get", "-t", TITLE])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--artist"));
    }

    #[test]
    fn get_cached_line() {
        let home = TempDir::new().unwrap();
        seed_lyrics(&home);

        get_at(&home, "1.5").success().stdout("Hello\n");
        get_at(&home, "5.5").success().stdout("World\n");
    }

    #[test]
    fn get_cached_instrumental() {
        let home = TempDir::new().unwrap();
        seed_lyrics(&home);

        get_at(&home, "4").success().stdout("(instrumental)\n");
    }

    #[test]
    fn get_before_first_line() {
        let home = TempDir::new().unwrap();
        seed_lyrics(&home);

        get_at(&home, "0.5")
            .success()
            .stdout("No lyrics available\n");
    }

    #[test]
    fn get_rejects_nan_position() {
        let home = TempDir::new().unwrap();
        seed_lyrics(&home);

        get_at(&home, "NaN")
            .failure()
            .stderr(predicate::str::contains("finite"));
    }

    #[test]
    fn get_non_utf8_record_fails_with_hint() {
        let home = TempDir::new().unwrap();
        let path = seed_lyrics(&home);
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

        get_at(&home, "1")
            .failure()
            .stderr(predicate::str::contains("lyriflow cache purge"));
    }

    #[test]
    fn get_cached_not_found() {
        let home = TempDir::new().unwrap();
        seed(&home, &CacheRecord::NotFound);

        get_at(&home, "10").success().stdout("Lyrics not found\n");
    }

    #[test]
    fn get_waybar_json() {
        let home = TempDir::new().unwrap();
        seed_lyrics(&home);

        let output = lyriflow(&home)
            .args(["get", "-t", TITLE, "-a", ARTIST, "-A", ALBUM, "-p", "2", "--waybar"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["text"], "Hello");
        assert_eq!(value["alt"], "playing");
        assert_eq!(value["class"], "lyrics");
        assert_eq!(value["tooltip"], "Song - Artist\rAlbum: Album");
    }

    #[test]
    fn get_waybar_not_found() {
        let home = TempDir::new().unwrap();
        seed(&home, &CacheRecord::NotFound);

        lyriflow(&home)
            .args(["get", "-t", TITLE, "-a", ARTIST, "-A", ALBUM, "-p", "2", "--waybar"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""class":"not-found""#));
    }

    #[test]
    fn get_corrupt_cache_fails_with_hint() {
        let home = TempDir::new().unwrap();
        let path = seed_lyrics(&home);
        std::fs::write(&path, "{truncated").unwrap();

        get_at(&home, "1")
            .failure()
            .stderr(predicate::str::contains("Corrupt cache record"))
            .stderr(predicate::str::contains("lyriflow cache purge"));
    }

    #[test]
    fn cache_purge_clears_records() {
        let home = TempDir::new().unwrap();
        seed_lyrics(&home);

        lyriflow(&home)
            .args(["cache", "purge"])
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ Cache cleared successfully"));

        assert!(cache_dir(&home).is_dir());
        assert!(dir_is_empty(&cache_dir(&home)));
    }

    #[test]
    fn cache_purge_without_existing_dir() {
        let home = TempDir::new().unwrap();

        lyriflow(&home).args(["cache", "purge"]).assert().success();

        assert!(cache_dir(&home).is_dir());
    }

    #[test]
    fn cache_path_prints_override() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .args(["cache", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                cache_dir(&home).to_string_lossy().into_owned(),
            ));
    }

    #[test]
    fn config_path() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let home = TempDir::new().unwrap();
        lyriflow(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[provider]"));
    }

    #[test]
    fn config_init_then_show_custom_cache_dir() {
        let home = TempDir::new().unwrap();
        lyriflow(&home).args(["config", "init"]).assert().success();
        assert!(home.path().join("config.toml").exists());

        std::fs::write(
            home.path().join("config.toml"),
            "[cache]\ndir = \"/tmp/lyriflow-from-config\"\n",
        )
        .unwrap();

        lyriflow(&home)
            .env_remove("LYRIFLOW_CACHE_DIR")
            .args(["cache", "path"])
            .assert()
            .success()
            .stdout("/tmp/lyriflow-from-config\n");
    }

    #[test]
    fn invalid_config_is_reported() {
        let home = TempDir::new().unwrap();
        std::fs::write(home.path().join("config.toml"), "[cache\n").unwrap();

        lyriflow(&home)
            .args(["cache", "path"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}
