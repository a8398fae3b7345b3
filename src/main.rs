use std::net::SocketAddr;
use std::sync::Arc;

use astra::Server;
use tracing::{error, info};

use rentease::app::{App, SystemClock};
use rentease::config::Config;
use rentease::db::{init_db, Database};
use rentease::responses::error_response;
use rentease::router::handle;
use rentease::scheduler::ReminderScheduler;
use rentease::telemetry::init_tracing;

fn main() {
    init_tracing();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.storage.path.clone());
    if let Err(e) = init_db(&db) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let app = App::new(db, config.simulation.clone(), Arc::new(SystemClock));

    match config.reminders.check_interval() {
        Some(interval) => {
            let scheduler = ReminderScheduler::new(app.state.clone(), app.clock(), interval);
            if let Err(e) = scheduler.spawn() {
                error!(error = %e, "failed to start reminder scheduler");
                std::process::exit(1);
            }
        }
        None => info!("periodic reminder checks disabled"),
    }

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(addr = %config.bind_addr(), error = %e, "invalid listen address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = config.server.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
