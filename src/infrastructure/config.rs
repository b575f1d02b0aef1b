//! 服务配置

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 8000;

/// 默认请求体上限 (100 KiB)
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 绑定地址
    pub host: IpAddr,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求体大小上限（字节）
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.body_limit, 102_400);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ServerConfig::default()
            .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .with_port(0)
            .with_body_limit(16);

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:0");
        assert_eq!(config.body_limit, 16);
    }
}
