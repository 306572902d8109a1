//! SOAP transport for the inventory external API.
//!
//! The remote inventory speaks a session-based SOAP dialect: log in once
//! to obtain a session id, carry it in a header on every call, log out
//! when done. Only three operations are used here:
//!
//! - `sessionLogin` / `sessionLogout`
//! - `objectFind` — exact lookup by oid
//! - `objectTreeFind` — class-filtered subtree query
//!
//! The envelopes are small and fixed, so requests are assembled from
//! templates with escaped values; responses are parsed with the
//! `quick-xml` event reader. SOAP faults are surfaced as
//! [`NetadmError::SoapFault`]; an empty `objects` list is a normal "not
//! found" result, not an error.

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

use crate::config::EapiSettings;
use crate::core::{NetadmError, Result};
use crate::inventory::node::{InetResource, Node, Oid, Opaque};
use crate::inventory::transport::ObjectSource;

/// Session-holding SOAP client for the inventory system.
///
/// Cloning shares the session; any clone may log it out.
#[derive(Clone)]
pub struct SoapClient {
    http: reqwest::Client,
    url: String,
    session_id: String,
}

impl SoapClient {
    /// Log in and return a connected client.
    ///
    /// # Errors
    ///
    /// Propagates HTTP failures; a fault from `sessionLogin` (bad
    /// credentials) becomes [`NetadmError::SoapFault`].
    pub async fn connect(settings: &EapiSettings) -> Result<Self> {
        let http = reqwest::Client::new();
        let body = login_request(&settings.username, &settings.password);
        let response = post_envelope(&http, &settings.url, body).await?;
        let session_id = parse_session_id(&response)?;
        tracing::debug!("inventory session established");
        Ok(Self { http, url: settings.url.clone(), session_id })
    }

    /// End the remote session. The client is unusable afterwards.
    pub async fn logout(self) -> Result<()> {
        let body = request_with_session("sessionLogout", &self.session_id, "");
        post_envelope(&self.http, &self.url, body).await?;
        tracing::debug!("inventory session closed");
        Ok(())
    }

    async fn call(&self, body: String) -> Result<Vec<Node>> {
        let response = post_envelope(&self.http, &self.url, body).await?;
        parse_objects(&response)
    }
}

#[async_trait]
impl ObjectSource for SoapClient {
    async fn lookup_by_id(&self, oid: Oid) -> Result<Vec<Node>> {
        let inner = format!("<queries><queries><oid>{oid}</oid></queries></queries>");
        self.call(request_with_session("objectFind", &self.session_id, &inner)).await
    }

    async fn bulk_query(&self, root: Oid, class_filter: &str, depth: u32) -> Result<Vec<Node>> {
        let inner = format!(
            "<oid>{root}</oid><classmask>{}</classmask><walkdown>{depth}</walkdown>",
            escape(class_filter)
        );
        self.call(request_with_session("objectTreeFind", &self.session_id, &inner)).await
    }
}

const ENVELOPE_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">"#;
const ENVELOPE_CLOSE: &str = "</soapenv:Envelope>";

fn login_request(username: &str, password: &str) -> String {
    format!(
        "{ENVELOPE_OPEN}<soapenv:Body><sessionLogin>\
         <username>{}</username><password>{}</password>\
         </sessionLogin></soapenv:Body>{ENVELOPE_CLOSE}",
        escape(username),
        escape(password)
    )
}

fn request_with_session(operation: &str, session_id: &str, inner: &str) -> String {
    format!(
        "{ENVELOPE_OPEN}<soapenv:Header><request><sessionid>{}</sessionid></request></soapenv:Header>\
         <soapenv:Body><{operation}>{inner}</{operation}></soapenv:Body>{ENVELOPE_CLOSE}",
        escape(session_id)
    )
}

async fn post_envelope(http: &reqwest::Client, url: &str, body: String) -> Result<String> {
    let response = http
        .post(url)
        .header("Content-Type", "text/xml; charset=utf-8")
        .body(body)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NetadmError::ApiStatus { system: "inventory", status: status.as_u16() });
    }
    Ok(response.text().await?)
}

/// Extract the session id from a `sessionLogin` response.
fn parse_session_id(xml: &str) -> Result<String> {
    check_fault(xml)?;
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut in_session_id = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"sessionid" => in_session_id = true,
            Event::Text(t) if in_session_id => return Ok(t.unescape()?.into_owned()),
            Event::End(e) if e.local_name().as_ref() == b"sessionid" => in_session_id = false,
            Event::Eof => break,
            _ => {}
        }
    }
    Err(NetadmError::SoapResponse { field: "sessionid" })
}

/// Surface a SOAP fault in `xml` as a typed error.
fn check_fault(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut in_fault = false;
    let mut field: &[u8] = b"";
    let mut code = String::new();
    let mut message = String::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Fault" => in_fault = true,
                b"faultcode" if in_fault => field = b"faultcode",
                b"faultstring" if in_fault => field = b"faultstring",
                _ => field = b"",
            },
            Event::Text(t) if in_fault => {
                let text = t.unescape()?.into_owned();
                match field {
                    b"faultcode" => code = text,
                    b"faultstring" => message = text,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if in_fault { Err(NetadmError::SoapFault { code, message }) } else { Ok(()) }
}

/// Parse the `objects` list out of an `objectFind`/`objectTreeFind`
/// response. Unknown elements are skipped so remote schema additions do
/// not break us.
fn parse_objects(xml: &str) -> Result<Vec<Node>> {
    check_fault(xml)?;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut nodes = Vec::new();
    let mut current: Option<NodeBuilder> = None;
    let mut current_opaque: Option<Opaque> = None;
    let mut in_resource = false;
    let mut field = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"object" => current = Some(NodeBuilder::default()),
                    b"opaque" if current.is_some() => {
                        current_opaque = Some(Opaque { name: String::new(), values: vec![] });
                    }
                    b"resource" if current.is_some() => in_resource = true,
                    _ => {}
                }
                field = name;
            }
            Event::Text(t) => {
                let Some(builder) = current.as_mut() else { continue };
                let text = t.unescape()?.into_owned();
                if let Some(opaque) = current_opaque.as_mut() {
                    match field.as_slice() {
                        b"name" => opaque.name = text,
                        b"value" => opaque.values.push(text),
                        _ => {}
                    }
                } else if in_resource {
                    match field.as_slice() {
                        b"address" => builder.address = Some(text),
                        b"prefixlen" => builder.prefixlen = text.parse().ok(),
                        _ => {}
                    }
                } else {
                    match field.as_slice() {
                        b"oid" => builder.oid = text.parse().ok(),
                        b"parentoid" => builder.parent_oid = text.parse().ok(),
                        b"class" => builder.class = text,
                        b"name" => builder.name = text,
                        b"flags" => builder.flags = Some(text),
                        b"role" => builder.role = Some(text),
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                match e.local_name().as_ref() {
                    b"object" => {
                        if let Some(builder) = current.take() {
                            if let Some(node) = builder.build() {
                                nodes.push(node);
                            }
                        }
                    }
                    b"opaque" => {
                        if let (Some(builder), Some(opaque)) =
                            (current.as_mut(), current_opaque.take())
                        {
                            builder.opaque.push(opaque);
                        }
                    }
                    b"resource" => in_resource = false,
                    _ => {}
                }
                field.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(nodes)
}

#[derive(Default)]
struct NodeBuilder {
    oid: Option<Oid>,
    parent_oid: Option<Oid>,
    class: String,
    name: String,
    opaque: Vec<Opaque>,
    flags: Option<String>,
    role: Option<String>,
    address: Option<String>,
    prefixlen: Option<u8>,
}

impl NodeBuilder {
    fn build(self) -> Option<Node> {
        let oid = self.oid?;
        // The remote encodes "no parent" as 0.
        let parent_oid = self.parent_oid.filter(|&p| p != 0);
        let resource = match (self.address, self.prefixlen) {
            (Some(address), Some(prefixlen)) => Some(InetResource { address, prefixlen }),
            _ => None,
        };
        Some(Node {
            oid,
            parent_oid,
            class: self.class,
            name: self.name,
            opaque: self.opaque,
            flags: self.flags,
            role: self.role,
            resource,
        })
    }
}
