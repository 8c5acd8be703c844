use super::*;

/// DNS resolver for the fetch client that refuses hosts resolving into
/// non-public address space.
///
/// Installed on the HTTP client, it screens the addresses of every
/// connection it makes, including redirect hops.
#[derive(Clone, Debug, Default)]
pub(crate) struct GuardedResolver {
  pinned: HashMap<String, IpAddr>,
}

impl GuardedResolver {
  async fn lookup(&self, host: &str) -> Result<Vec<SocketAddr>, FetchError> {
    match self.pinned.get(host) {
      Some(&ip) => HostGuard::screen(host, [SocketAddr::new(ip, 0)]),
      None => HostGuard::resolve(host, 0).await,
    }
  }

  /// Answers lookups for `host` with `ip` instead of asking DNS. Pinned
  /// addresses are screened like resolved ones.
  #[cfg(test)]
  pub(crate) fn pin(mut self, host: &str, ip: IpAddr) -> Self {
    self.pinned.insert(host.into(), ip);
    self
  }
}

impl Resolve for GuardedResolver {
  fn resolve(&self, name: Name) -> Resolving {
    let resolver = self.clone();

    Box::pin(async move {
      let addrs = resolver.lookup(name.as_str()).await.inspect_err(|error| {
        warn!(host = name.as_str(), %error, "blocked connection");
      })?;

      Ok::<Addrs, Box<dyn std::error::Error + Send + Sync>>(Box::new(
        addrs.into_iter(),
      ))
    })
  }
}
