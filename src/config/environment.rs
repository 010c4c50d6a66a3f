// self
use crate::{_prelude::*, error::ConfigError};

/// Supported Penneo deployments, each served from a fixed OAuth hostname.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	/// Sandbox deployment used for integration work.
	Sandbox,
	/// Production deployment.
	Production,
}
impl Environment {
	/// Every supported environment, in lookup order.
	pub const ALL: [Environment; 2] = [Environment::Sandbox, Environment::Production];

	/// Returns the configuration name of the environment.
	pub const fn as_str(self) -> &'static str {
		match self {
			Environment::Sandbox => "sandbox",
			Environment::Production => "production",
		}
	}

	/// Returns the hostname serving the OAuth endpoints.
	pub const fn oauth_hostname(self) -> &'static str {
		match self {
			Environment::Sandbox => "sandbox.oauth.penneo.cloud",
			Environment::Production => "login.penneo.com",
		}
	}

	/// Token endpoint URL (`https://{hostname}/oauth/token`).
	pub fn token_endpoint(self) -> Url {
		self.oauth_url("token")
	}

	/// Authorization endpoint URL (`https://{hostname}/oauth/authorize`).
	pub fn authorization_endpoint(self) -> Url {
		self.oauth_url("authorize")
	}

	// Hostnames come from the constant table above, so parsing cannot fail.
	fn oauth_url(self, path: &str) -> Url {
		Url::parse(&format!("https://{}/oauth/{path}", self.oauth_hostname()))
			.expect("OAuth hostnames should form valid URLs.")
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<Environment> for String {
	fn from(env: Environment) -> Self {
		env.as_str().to_owned()
	}
}
impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|env| env.as_str() == s)
			.ok_or_else(|| ConfigError::UnsupportedEnvironment { environment: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parses_supported_names_only() {
		assert_eq!("sandbox".parse::<Environment>().ok(), Some(Environment::Sandbox));
		assert_eq!("production".parse::<Environment>().ok(), Some(Environment::Production));

		let err = "not-a-real-env"
			.parse::<Environment>()
			.expect_err("Unknown environment names should be rejected.");

		assert!(matches!(
			err,
			ConfigError::UnsupportedEnvironment { ref environment } if environment == "not-a-real-env"
		));
	}

	#[test]
	fn endpoints_follow_the_hostname_table() {
		assert_eq!(
			Environment::Sandbox.token_endpoint().as_str(),
			"https://sandbox.oauth.penneo.cloud/oauth/token"
		);
		assert_eq!(
			Environment::Production.authorization_endpoint().as_str(),
			"https://login.penneo.com/oauth/authorize"
		);

		for env in Environment::ALL {
			assert_eq!(env.token_endpoint().host_str(), Some(env.oauth_hostname()));
			assert_eq!(env.authorization_endpoint().path(), "/oauth/authorize");
		}
	}
}
