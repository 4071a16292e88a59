use std::rc::Rc;

use minihttpd::config::Config;
use minihttpd::daemon;
use minihttpd::server::Server;

fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    // Detach before the runtime exists so the child owns the event loop.
    // Argument errors above still reach the invoking terminal.
    if !cfg.foreground {
        daemon::detach()?;
    }

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // One thread, one event loop: handlers interleave cooperatively.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let server = Server::bind(&cfg).await?;
        let root: Rc<str> = Rc::from(cfg.directory.as_str());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                tokio::select! {
                    res = server.serve(root) => {
                        res?;
                    }

                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                }

                Ok(())
            })
            .await
    })
}
