use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};

#[tokio::main]
async fn main() {
    let addr = std::env::args().nth(1).unwrap_or_else(|| "127.0.0.1:8080".to_string());
    let path = std::env::args().nth(2).unwrap_or_else(|| "/".to_string());
    eprintln!("Connecting to {}", addr);
    let mut stream = TcpStream::connect(&addr).await.expect("TCP connect failed");

    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        path, addr
    );
    stream
        .write_all(request.as_bytes())
        .await
        .expect("request write failed");

    // Wait up to 5s for the panel, print the status line, and exit
    let mut body = Vec::new();
    match timeout(Duration::from_secs(5), stream.read_to_end(&mut body)).await {
        Ok(Ok(_)) => {
            let text = String::from_utf8_lossy(&body);
            match text.lines().next() {
                Some(status) => println!("Response: {}", status),
                None => {
                    eprintln!("Empty response");
                    std::process::exit(2);
                }
            }
        }
        Ok(Err(e)) => {
            eprintln!("Read error: {}", e);
            std::process::exit(3);
        }
        Err(_) => {
            eprintln!("Timeout waiting for response");
            std::process::exit(4);
        }
    }
}
