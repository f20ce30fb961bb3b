use crate::routes::Handler;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run(addr: SocketAddr, handler: Box<dyn Handler>) -> Result<(), io::Error> {
    let handler: Arc<dyn Handler> = Arc::from(handler);
    let listener = TcpListener::bind(addr).await?;

    log::info!("Listening on {}", addr);

    loop {
        let (tcp, _) = listener.accept().await?;
        let io = TokioIo::new(tcp);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let serve = service_fn(move |req: Request<Incoming>| {
                let handler = Arc::clone(&handler);
                async move {
                    // The handler only looks at the request head; the
                    // body is dropped unread.
                    let (parts, _body) = req.into_parts();
                    Ok::<_, Infallible>(handler.handle(&parts))
                }
            });

            if let Err(e) = auto::Builder::new(TokioExecutor::new())
                .serve_connection(io, serve)
                .await
            {
                log::error!("Error serving connection: {}", e);
            }
        });
    }
}
