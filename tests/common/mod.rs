use assert_cmd::Command;

pub fn reftag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reftag").unwrap();
    cmd.env_remove("REFTAG_ROOT");
    cmd
}
