#![allow(dead_code)]
// Each test binary only uses some of these helpers

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const MODULE_NAME: &str = "gluon-port";

pub const GLUON_PORT_ARTIFACT: &str = r#"{
    "modules": {
        "gluon-port": ["gp", "urn:opnfv:gluon:port"],
        "ietf-inet-types": ["inet", "urn:ietf:params:xml:ns:yang:ietf-inet-types"]
    },
    "tree": {
        "gluon-port:port": ["container", {
            "id": ["leaf", "string"],
            "mtu": ["leaf", "int32"],
            "binding": ["container", {
                "host_id": ["leaf", "string"],
                "profile": ["container", {
                    "vnic_type": ["leaf", "string"]
                }]
            }],
            "fixed_ips": ["list", {"ip_address": ["leaf", ["union", ["string", "string"]]]}, [["gluon-port", "ip_address"]]],
            "status": ["leaf", "enumeration"]
        }]
    },
    "annotations": {}
}"#;

pub const LIST_ONLY_ARTIFACT: &str = r#"{
    "modules": {"gluon-port": ["gp", "urn:opnfv:gluon:port"]},
    "tree": {
        "gluon-port:ports": ["container", {
            "port": ["list", {"id": ["leaf", "string"]}, [["gluon-port", "id"]]]
        }]
    }
}"#;

pub const NAME_OUTPUT: &str = "gluon-port@2016-03-04\n";

pub const TREE_OUTPUT: &str = "module: gluon-port
  +--rw port
     +--rw id?        string
     +--rw mtu?       int32
";

pub const COMPILER_ERROR: &str = "gluon-port.yang:3: error: unexpected keyword \"contaner\"";

/// Writes a shell script that behaves like the compiler for the formats
/// this crate uses, serving canned output.
pub fn stub_compiler(dir: &Path, artifact: &str) -> PathBuf {
    fs::write(dir.join("artifact.fixture"), artifact).unwrap();
    fs::write(dir.join("name.fixture"), NAME_OUTPUT).unwrap();
    fs::write(dir.join("tree.fixture"), TREE_OUTPUT).unwrap();

    let script = format!(
        r#"#!/bin/sh
out=""
fmt=""
while [ $# -gt 0 ]; do
  case "$1" in
    -f) fmt="$2"; shift 2 ;;
    -o) out="$2"; shift 2 ;;
    -p|--plugindir) shift 2 ;;
    *) shift ;;
  esac
done
case "$fmt" in
  jtox) cp '{dir}/artifact.fixture' "$out" ;;
  name) cat '{dir}/name.fixture' ;;
  tree) cat '{dir}/tree.fixture' ;;
  *) echo "unsupported format $fmt" >&2; exit 1 ;;
esac
"#,
        dir = dir.display()
    );
    write_script(&dir.join("stub-pyang"), &script)
}

/// A compiler that rejects every schema.
pub fn failing_compiler(dir: &Path) -> PathBuf {
    let script = format!("#!/bin/sh\necho '{COMPILER_ERROR}' >&2\nexit 1\n");
    write_script(&dir.join("failing-pyang"), &script)
}

pub fn schema_file(dir: &Path) -> PathBuf {
    let path = dir.join("gluon-port.yang");
    fs::write(&path, "module gluon-port { }\n").unwrap();
    path
}

fn write_script(path: &Path, contents: &str) -> PathBuf {
    fs::write(path, contents).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}
