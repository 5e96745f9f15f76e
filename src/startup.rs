use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::mail_dispatcher::MailDispatcher;
use crate::routes;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.email_client.client();
        let dispatcher = MailDispatcher::new(email_client, configuration.contact.recipient);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, dispatcher)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, dispatcher: MailDispatcher) -> Result<Server, std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/api/contact", web::post().to(routes::submit_contact))
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
