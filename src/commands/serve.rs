use crate::server;

pub async fn run(port: u16) {
    println!("🚀 Starting marketscan server on port {}", port);
    println!("   📊 Scan results:  GET /scans/{{slug}}");
    println!("   📋 Catalogue:     GET /scans");
    println!("   ❤️  Health:        GET /health");
    println!();

    if let Err(e) = server::serve(port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
