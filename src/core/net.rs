// src/core/net.rs

// Single blocking GET. The pipeline has exactly one network touch and no
// retry policy: a failed fetch fails the run.

use std::error::Error;

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;

pub fn http_get(opts: &FetchOptions) -> Result<String, Box<dyn Error>> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()?;

    let response = client.get(&opts.url).send()?.error_for_status()?;

    // text() decodes per the Content-Type charset; the live signup pages
    // declare ISO-8859-1, not UTF-8.
    Ok(response.text()?)
}
