#![allow(dead_code)]

use assert_cmd::Command;
use gphoto2_sizes::{rust_records, SizeRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the probe binary
pub struct ProbeEnv {
    tmp: TempDir,
}

impl ProbeEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gphoto2-sizes").expect("binary built");
        cmd.env_remove("GPHOTO2_SIZES_CONFIG")
            .env_remove("RUST_LOG")
            .env("CC", "/nonexistent/gphoto2-sizes-cc")
            .current_dir(self.path());
        cmd
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.path().join("probe.toml");
        fs::write(&path, body).expect("write config");
        path
    }

    /// A stand-in C compiler. It ignores the source and "links" a shell
    /// script that prints `records` in size-record format.
    #[cfg(unix)]
    pub fn fake_compiler(&self, records: &[SizeRecord]) -> PathBuf {
        let mut body = String::new();
        for record in records {
            body.push_str(&format!("echo '{}'\n", record));
        }
        self.compiler_linking(&body)
    }

    /// A stand-in C compiler whose output binary runs `body` as a shell script
    #[cfg(unix)]
    pub fn compiler_linking(&self, body: &str) -> PathBuf {
        let binary = self.write_script("linked_binary.sh", &format!("#!/bin/sh\n{}", body));

        let compiler = format!(
            "#!/bin/sh\nout=\"\"\nwhile [ $# -gt 0 ]; do\n  if [ \"$1\" = \"-o\" ]; then out=\"$2\"; shift; fi\n  shift\ndone\ncp '{}' \"$out\"\nchmod +x \"$out\"\n",
            binary.display()
        );
        self.write_script("fake_cc.sh", &compiler)
    }

    /// A stand-in C compiler that fails the way a missing header does
    #[cfg(unix)]
    pub fn failing_compiler(&self) -> PathBuf {
        self.write_script(
            "failing_cc.sh",
            "#!/bin/sh\necho 'testsizes.c:6:10: fatal error: gphoto2/gphoto2-port.h: No such file or directory' >&2\nexit 1\n",
        )
    }

    #[cfg(unix)]
    fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, body).expect("write script");
        make_executable(&path);
        path
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).expect("stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("chmod script");
}

/// Minimal libgphoto2 headers declaring the probed structures.
/// `CameraFilePath::name` is 256 bytes, twice the 2.5 headers' length.
pub fn write_stub_headers(root: &Path) -> PathBuf {
    let include = root.join("include");
    let gphoto2 = include.join("gphoto2");
    fs::create_dir_all(&gphoto2).expect("create header dir");

    let headers = [
        ("gphoto2-port.h", ""),
        (
            "gphoto2-camera.h",
            "typedef struct { char text[32 * 1024]; } CameraText;\n\
             typedef struct { char name[256]; char folder[1024]; } CameraFilePath;\n",
        ),
        ("gphoto2-file.h", ""),
        ("gphoto2-filesys.h", ""),
        (
            "gphoto2-abilities-list.h",
            "typedef struct {\n\
               char model[128]; int status; int port; int speed[64];\n\
               int operations; int file_operations; int folder_operations;\n\
               int usb_vendor; int usb_product; int usb_class; int usb_subclass; int usb_protocol;\n\
               char library[1024]; char id[1024];\n\
               int device_type; int reserved[7];\n\
             } CameraAbilities;\n",
        ),
    ];
    for (name, body) in headers {
        fs::write(gphoto2.join(name), body).expect("write stub header");
    }
    include
}

/// Whether a system C compiler answers as `cc`
pub fn cc_available() -> bool {
    std::process::Command::new("cc")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Rust-side records with one size bumped, to simulate a drifted header
pub fn drifted_records(name: &str, delta: usize) -> Vec<SizeRecord> {
    rust_records()
        .into_iter()
        .map(|mut r| {
            if r.name == name {
                r.size += delta;
            }
            r
        })
        .collect()
}
