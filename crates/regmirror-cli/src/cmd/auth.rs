use std::sync::Arc;

use regmirror_core::access::is_maintainer;
use regmirror_core::{
    AccessClassifier, Actor, Config, Maintainer, Params, classify_authorization,
    is_sync_worker_request,
};

pub fn classify(header: &str) {
    match classify_authorization(header) {
        Some(scheme) => println!("{scheme}"),
        None => println!("UNCLASSIFIED"),
    }
}

pub fn admin(config: &Arc<Config>, user: &str) {
    let access = AccessClassifier::new(Arc::clone(config));
    println!("{}", access.is_admin(user));
}

pub fn maintainer(user: &str, admin: bool, maintainers: &[String]) {
    let actor = Actor::new(user, admin);
    let maintainers: Vec<Maintainer> = maintainers.iter().map(Maintainer::new).collect();
    println!("{}", is_maintainer(&actor, Some(maintainers.as_slice())));
}

pub fn private(config: &Arc<Config>, name: &str) {
    let access = AccessClassifier::new(Arc::clone(config));
    println!("{}", access.is_private_scoped_package(name));
}

pub fn sync_worker(cache: Option<&str>, user_agent: Option<&str>) {
    let mut query = Params::new();
    if let Some(cache) = cache {
        query.insert("cache".to_string(), cache.to_string());
    }
    let mut headers = Params::new();
    if let Some(ua) = user_agent {
        headers.insert("user-agent".to_string(), ua.to_string());
    }
    println!("{}", is_sync_worker_request(&query, &headers));
}
