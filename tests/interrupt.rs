#![cfg(unix)]

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};

#[test]
fn sigint_ends_the_process_while_waiting_for_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_dungeon-escape"))
        .arg("--no-color")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DUNGEON_SAVE_PATH")
        .env_remove("DUNGEON_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // kept open so the game never sees end of input
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = [0u8; 1024];
        loop {
            match stdout.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut out = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(10);
    while !String::from_utf8_lossy(&out).contains("\n> ") {
        let chunk = rx
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .expect("no prompt");
        out.extend(chunk);
    }
    // give the loop time to start listening for ctrl-c
    std::thread::sleep(Duration::from_millis(300));

    let kill = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("still running 5s after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(50));
    };
    assert!(status.success(), "exit status: {status:?}");

    while let Ok(chunk) = rx.recv_timeout(Duration::from_secs(1)) {
        out.extend(chunk);
    }
    assert!(String::from_utf8_lossy(&out).contains("Game interrupted. Thanks for playing!"));
}
