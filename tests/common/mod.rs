use assert_cmd::Command;

pub fn maxim_cmd() -> Command {
    Command::cargo_bin("maxim").unwrap()
}
