use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::email_client::EmailClient;
use crate::routes::{health_check, join_waitlist, preflight, send_confirmation};
use crate::waitlist::{PgWaitlistStore, WaitlistClient};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client();
        let connection_pool = get_connection_pool(&config.database);

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let request_timeout = config.app.request_timeout();
        let server = run(
            listener,
            connection_pool,
            email_client,
            config.app.base_url,
            request_timeout,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    email_client: EmailClient,
    base_url: String,
    request_timeout: Duration,
) -> Result<Server, anyhow::Error> {
    let waitlist_client = WaitlistClient::new(
        Arc::new(PgWaitlistStore::new(db_pool)),
        format!("{base_url}/send-confirmation"),
        request_timeout,
    );

    let email_client = web::Data::new(email_client);
    let waitlist_client = web::Data::new(waitlist_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/send-confirmation", web::post().to(send_confirmation))
            .route(
                "/send-confirmation",
                web::method(Method::OPTIONS).to(preflight),
            )
            .route("/waitlist", web::post().to(join_waitlist))
            .route("/waitlist", web::method(Method::OPTIONS).to(preflight))
            .app_data(email_client.clone())
            .app_data(waitlist_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_pool(db_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(db_config.with_db())
}
