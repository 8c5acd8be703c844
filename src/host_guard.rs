use super::*;

/// Rejects fetch targets that point into non-public address space.
pub(crate) struct HostGuard;

impl HostGuard {
  fn blocked_ip(ip: IpAddr) -> bool {
    match ip {
      IpAddr::V4(addr) => Self::blocked_ipv4(addr),
      IpAddr::V6(addr) => Self::blocked_ipv6(addr),
    }
  }

  fn blocked_ipv4(addr: Ipv4Addr) -> bool {
    let [first, second, ..] = addr.octets();

    addr.is_private()
      || addr.is_loopback()
      || addr.is_link_local()
      || addr.is_broadcast()
      || addr.is_documentation()
      || addr.is_unspecified()
      || addr.is_multicast()
      || first == 0
      // 100.64.0.0/10 carrier-grade NAT
      || (first == 100 && (second & 0xc0) == 64)
  }

  fn blocked_ipv6(addr: Ipv6Addr) -> bool {
    // ::ffff:a.b.c.d and ::a.b.c.d
    if let Some(embedded) = addr.to_ipv4() {
      return Self::blocked_ipv4(embedded);
    }

    let segments = addr.segments();

    // 64:ff9b::/96 NAT64
    if segments[..6] == [0x64, 0xff9b, 0, 0, 0, 0] {
      return Self::blocked_ipv4(Self::embedded_ipv4(segments[6], segments[7]));
    }

    // 2002::/16 6to4
    if segments[0] == 0x2002 {
      return Self::blocked_ipv4(Self::embedded_ipv4(segments[1], segments[2]));
    }

    addr.is_loopback()
      || addr.is_unspecified()
      || (segments[0] & 0xfe00) == 0xfc00
      || (segments[0] & 0xffc0) == 0xfe80
      || (segments[0] & 0xff00) == 0xff00
      // 2001:db8::/32 documentation
      || (segments[0] == 0x2001 && segments[1] == 0x0db8)
  }

  /// Parses `raw`, requires http(s), and rejects hosts that are, or resolve
  /// to, non-public addresses.
  pub(crate) async fn check(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|error| FetchError::InvalidUrl {
      reason: error.to_string(),
      url: raw.into(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
      return Err(FetchError::InvalidUrl {
        reason: format!("unsupported scheme {}", url.scheme()),
        url: raw.into(),
      });
    }

    Self::check_literal(&url)?;

    if let Some(Host::Domain(domain)) = url.host() {
      Self::resolve(domain, url.port_or_known_default().unwrap_or(443))
        .await?;
    }

    Ok(url)
  }

  /// Checks a URL without touching the network.
  pub(crate) fn check_literal(url: &Url) -> Result<(), FetchError> {
    let Some(host) = url.host() else {
      return Err(FetchError::Security(format!("URL {url} has no host")));
    };

    let blocked = match host {
      Host::Domain(domain) => {
        let domain = domain.trim_end_matches('.').to_ascii_lowercase();

        domain == "localhost"
          || domain.ends_with(".localhost")
          || domain.ends_with(".local")
      }
      Host::Ipv4(addr) => Self::blocked_ipv4(addr),
      Host::Ipv6(addr) => Self::blocked_ipv6(addr),
    };

    if blocked {
      return Err(FetchError::Security(format!(
        "refusing to fetch {url}: host is in a private or local network range"
      )));
    }

    Ok(())
  }

  fn embedded_ipv4(high: u16, low: u16) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(high) << 16) | u32::from(low))
  }

  /// Resolves `host` and fails unless every address is public.
  pub(crate) async fn resolve(
    host: &str,
    port: u16,
  ) -> Result<Vec<SocketAddr>, FetchError> {
    let addrs = lookup_host((host, port)).await.map_err(|error| {
      FetchError::Security(format!("could not resolve {host}: {error}"))
    })?;

    Self::screen(host, addrs)
  }

  pub(crate) fn screen(
    host: &str,
    addrs: impl IntoIterator<Item = SocketAddr>,
  ) -> Result<Vec<SocketAddr>, FetchError> {
    let addrs = addrs.into_iter().collect::<Vec<_>>();

    if let Some(addr) = addrs.iter().find(|addr| Self::blocked_ip(addr.ip())) {
      return Err(FetchError::Security(format!(
        "refusing to connect to {host}: it resolves to private address {}",
        addr.ip()
      )));
    }

    if addrs.is_empty() {
      return Err(FetchError::Security(format!(
        "{host} did not resolve to any address"
      )));
    }

    Ok(addrs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn literal(raw: &str) -> Result<(), FetchError> {
    HostGuard::check_literal(&Url::parse(raw).unwrap())
  }

  #[test]
  fn blocks_private_and_local_literals() {
    for raw in [
      "http://127.0.0.1/admin",
      "http://10.0.0.1/internal",
      "http://172.16.5.4/",
      "http://192.168.1.2/",
      "http://169.254.169.254/latest/meta-data",
      "http://0.0.0.0/",
      "http://100.64.1.1/",
      "http://[::1]:8080/",
      "http://[fe80::1]/",
      "http://[fd00::1]/",
      "http://[::ffff:127.0.0.1]/",
      "http://[::7f00:1]/",
      "http://[2001:db8::1]/",
      "http://[64:ff9b::a00:1]/",
      "http://[2002:c0a8:101::1]/",
      "http://localhost:3000/",
      "http://api.localhost/",
      "http://printer.local/",
    ] {
      assert!(
        matches!(literal(raw), Err(FetchError::Security(_))),
        "{raw} should be blocked"
      );
    }
  }

  #[test]
  fn allows_public_literals() {
    for raw in [
      "https://example.com/",
      "http://93.184.216.34/",
      "http://100.128.0.1/",
      "http://[2606:4700::1111]/",
      "http://[64:ff9b::808:808]/",
      "http://[2002:808:808::1]/",
      "http://[::ffff:8.8.8.8]/",
    ] {
      assert!(literal(raw).is_ok(), "{raw} should be allowed");
    }
  }

  #[tokio::test]
  async fn check_rejects_unsupported_schemes() {
    assert!(matches!(
      HostGuard::check("file:///etc/passwd").await,
      Err(FetchError::InvalidUrl { .. })
    ));

    assert!(matches!(
      HostGuard::check("not a url").await,
      Err(FetchError::InvalidUrl { .. })
    ));
  }

  #[tokio::test]
  async fn check_blocks_loopback_before_resolving() {
    assert!(matches!(
      HostGuard::check("http://127.0.0.1/admin").await,
      Err(FetchError::Security(_))
    ));
  }

  #[tokio::test]
  async fn check_accepts_public_ip_literals() {
    assert_eq!(
      HostGuard::check("http://1.1.1.1/dns").await.unwrap().as_str(),
      "http://1.1.1.1/dns"
    );
  }

  #[test]
  fn screen_rejects_any_private_address() {
    let public = SocketAddr::from(([93, 184, 216, 34], 0));
    let private = SocketAddr::from(([10, 0, 0, 1], 0));

    assert_eq!(HostGuard::screen("public.test", [public]).unwrap(), [public]);

    assert!(matches!(
      HostGuard::screen("mixed.test", [public, private]),
      Err(FetchError::Security(_))
    ));

    assert!(matches!(
      HostGuard::screen("empty.test", Vec::new()),
      Err(FetchError::Security(_))
    ));
  }
}
