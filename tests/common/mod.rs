#![allow(dead_code)]

use std::{
    path::PathBuf,
    process::{Command, Output},
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

pub const SAMPLE_BODY: &str = r#"{"response":[{"ticker":"ABC","ticker_name":"Alpha","latest_price":"120.5","points_change":1.2,"percentage_change":0.5,"traded_of_mkt_cap":3.1},{"ticker":"XYZ","ticker_name":"Omega","latest_price":"87","points_change":-2.5,"percentage_change":-2.79,"traded_of_mkt_cap":0.45}]}"#;

/// Answers exactly one request with the given status line and body.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}/smtm/home/trending")
}

pub fn temp_root(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stocksheet-it-{}-{name}", std::process::id()))
}

/// Runs the binary with an isolated, empty home directory.
pub async fn run_stocksheet(home: PathBuf, args: Vec<String>) -> Output {
    std::fs::create_dir_all(&home).unwrap();

    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_stocksheet"))
            .args(&args)
            .env("HOME", &home)
            .env_remove("XDG_CONFIG_HOME")
            .env("NO_PROXY", "127.0.0.1")
            .env("NO_COLOR", "1")
            .output()
            .expect("invoke stocksheet")
    })
    .await
    .unwrap()
}
