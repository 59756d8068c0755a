use std::{
	io,
	sync::{Arc, Mutex, PoisonError},
};

use axum::{
	Router,
	extract::{self, Query},
	http::StatusCode,
	response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::oneshot};

use crate::{Client, ScopeToken, State, client::Error, transport::HttpClient};

/// Page served to the browser once the code is received.
pub const CLOSE_PAGE: &str =
	"<script type=\"text/javascript\">close()</script>\nyou may close this webpage";

/// Opens the authorization URL for the user.
pub trait Launcher {
	fn launch(&self, url: &str) -> io::Result<()>;
}

impl<F: Fn(&str) -> io::Result<()>> Launcher for F {
	fn launch(&self, url: &str) -> io::Result<()> {
		self(url)
	}
}

/// Opens URLs with the platform's default browser.
///
/// The URL reaches the browser whole on every platform, query included, and
/// the opener process is waited for.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
	fn launch(&self, url: &str) -> io::Result<()> {
		log::debug!("opening the authorization page in the default browser");
		open::that(url)
	}
}

#[derive(Deserialize)]
struct CallbackParams {
	state: Option<String>,
	code: Option<String>,
}

type CallbackSender = Arc<Mutex<Option<oneshot::Sender<Result<String, String>>>>>;

/// Accepts the redirect on any path. Only the first redirect is reported.
async fn callback(
	extract::State(sender): extract::State<CallbackSender>,
	Query(params): Query<CallbackParams>,
) -> Response {
	let outcome = check_callback(params);

	let response = match &outcome {
		Ok(_) => Html(CLOSE_PAGE).into_response(),
		Err(e) => (StatusCode::BAD_REQUEST, e.clone()).into_response(),
	};

	if let Some(sender) = sender.lock().unwrap_or_else(PoisonError::into_inner).take() {
		// The receiver is gone when the flow already ended.
		let _ = sender.send(outcome);
	}

	response
}

fn check_callback(params: CallbackParams) -> Result<String, String> {
	if !State::default_state().matches(params.state.as_deref()) {
		let state = params.state.unwrap_or_default();
		log::warn!("authorization callback with incorrect state `{state}`");
		return Err(format!("evidence of tampering, incorrect state `{state}`"));
	}

	match params.code {
		Some(code) if !code.is_empty() => Ok(code),
		_ => Err("an unidentified error occurred".to_owned()),
	}
}

impl<H: HttpClient> Client<H> {
	/// Runs the whole authorization code flow interactively.
	///
	/// Serves the redirect on `listener`, which must be reachable at
	/// `redirect_uri`, opens the authorization URL with `launcher`, then
	/// exchanges the code the user is redirected with. The listener is closed
	/// before returning, whatever the outcome.
	pub async fn auto_authorize<'s>(
		&mut self,
		listener: TcpListener,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
		scopes: impl IntoIterator<Item = &'s ScopeToken>,
		launcher: &impl Launcher,
	) -> Result<(), Error> {
		let url = self.begin_authorization(client_id, client_secret, redirect_uri, scopes)?;

		let (code_tx, code_rx) = oneshot::channel();
		let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

		let sender: CallbackSender = Arc::new(Mutex::new(Some(code_tx)));
		let app = Router::new().fallback(callback).with_state(sender);

		let mut server = tokio::spawn(async move {
			axum::serve(listener, app)
				.with_graceful_shutdown(async move {
					let _ = shutdown_rx.await;
				})
				.await
		});

		let mut server_done = false;
		let outcome = match launcher.launch(&url) {
			Err(e) => Err(Error::Callback(format!("unable to open `{url}`: {e}"))),
			Ok(()) => {
				tokio::select! {
					received = code_rx => match received {
						Ok(result) => result.map_err(Error::Callback),
						Err(_) => Err(Error::Callback("callback server stopped".to_owned())),
					},
					result = &mut server => {
						server_done = true;
						Err(Error::Callback(match result {
							Ok(Ok(())) => "callback server stopped".to_owned(),
							Ok(Err(e)) => format!("callback server failed: {e}"),
							Err(e) => format!("callback server failed: {e}"),
						}))
					}
				}
			}
		};

		if !server_done {
			let _ = shutdown_tx.send(());
			match server.await {
				Ok(Ok(())) => (),
				Ok(Err(e)) => log::error!("callback server failed: {e}"),
				Err(e) => log::error!("callback server failed: {e}"),
			}
		}

		let code = outcome?;
		log::debug!("authorization code received");
		self.exchange_code(&code).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params(state: Option<&str>, code: Option<&str>) -> CallbackParams {
		CallbackParams {
			state: state.map(str::to_owned),
			code: code.map(str::to_owned),
		}
	}

	#[test]
	fn accepts_code_with_state() {
		assert_eq!(
			check_callback(params(Some("go-uber"), Some("abc"))),
			Ok("abc".to_owned())
		);
	}

	#[test]
	fn rejects_wrong_state() {
		let error = check_callback(params(Some("forged"), Some("abc"))).unwrap_err();
		assert!(error.starts_with("evidence of tampering"));
		assert!(check_callback(params(None, Some("abc"))).is_err());
	}

	#[test]
	fn rejects_missing_code() {
		assert_eq!(
			check_callback(params(Some("go-uber"), None)),
			Err("an unidentified error occurred".to_owned())
		);
		assert!(check_callback(params(Some("go-uber"), Some(""))).is_err());
	}

	#[test]
	fn launcher_receives_whole_authorize_url() {
		let mut client = Client::new(());
		let url = client
			.begin_authorization("cid", "secret", "https://app/cb", [crate::scope_token!("profile")])
			.unwrap();

		let launched = Mutex::new(String::new());
		let launcher = |url: &str| -> io::Result<()> {
			*launched.lock().unwrap() = url.to_owned();
			Ok(())
		};
		launcher.launch(&url).unwrap();

		let launched = launched.into_inner().unwrap();
		let (_, query) = launched.split_once('?').unwrap();
		let keys: Vec<&str> = query
			.split('&')
			.filter_map(|pair| pair.split_once('=').map(|(k, _)| k))
			.collect();
		assert_eq!(
			keys,
			["client_id", "redirect_uri", "response_type", "scope", "state"]
		);
	}

	fn assert_launcher<L: Launcher>(_: &L) {}

	#[test]
	fn system_browser_is_a_launcher() {
		assert_launcher(&SystemBrowser);
	}

	#[test]
	fn closures_launch() {
		let launcher = |url: &str| -> io::Result<()> {
			assert!(url.contains("state=go-uber"));
			Ok(())
		};
		assert!(launcher.launch("https://login.uber.com/oauth/authorize?state=go-uber").is_ok());
	}
}
