use std::path::Path;
use std::sync::OnceLock;

use config::Config;
use serde::{Deserialize, Serialize};
use simac::{MacBuilder, MacType};

use crate::error::SiError;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SiConfig {
    // 读取文件时每次送入摘要算法的字节数
    pub io_buf_size: usize,

    // 并行计算多个文件摘要时的最大线程数
    pub threads: usize,

    // 未指定`--mac`时使用的摘要算法(DICOM defined term)
    pub mac: String,

    // 允许使用的摘要算法, 为空时不限制
    pub allowed: Vec<String>,
}

impl Default for SiConfig {
    fn default() -> Self {
        Self {
            io_buf_size: 8 * 1024,
            threads: (num_cpus::get() >> 1).max(1),
            mac: MacType::SHA384.defined_term().to_string(),
            allowed: Vec::new(),
        }
    }
}

static CONFIG: OnceLock<SiConfig> = OnceLock::new();

impl SiConfig {
    /// 全局配置, 未调用`init`时为默认配置
    pub fn config() -> &'static Self {
        CONFIG.get_or_init(Self::default)
    }

    /// 加载配置并设置为全局配置. 全局配置只能设置一次, 之后的调用直接返回已有的配置.
    pub fn init(f: Option<&Path>) -> anyhow::Result<&'static Self> {
        if let Some(c) = CONFIG.get() {
            return Ok(c);
        }

        let c = Self::load(f)?;
        Ok(CONFIG.get_or_init(|| c))
    }

    /// 按优先级从低到高合并: 默认配置, 环境变量`SIDIGEST__*`, 配置文件`f`
    pub fn load(f: Option<&Path>) -> anyhow::Result<Self> {
        let default_config = Config::try_from(&SiConfig::default())?;

        let mut config = Config::builder().add_source(default_config).add_source(
            config::Environment::with_prefix("SIDIGEST")
                .try_parsing(true)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("allowed"),
        );

        if let Some(f) = f {
            anyhow::ensure!(f.is_file(), SiError::PathNotExist(f.display().to_string()));
            config = config.add_source(config::File::from(f));
        }

        let mut siconfig: SiConfig = config.build()?.try_deserialize()?;
        siconfig.threads = siconfig.threads.max(1);
        siconfig.io_buf_size = siconfig.io_buf_size.max(1);

        log::trace!("{:?}", siconfig);

        Ok(siconfig)
    }

    /// 允许使用的摘要算法
    pub fn allowed_macs(&self) -> Result<Vec<MacType>, SiError> {
        self.allowed
            .iter()
            .map(|x| x.parse::<MacType>().map_err(SiError::from))
            .collect()
    }

    /// `mac`为`None`时使用配置中的默认算法
    pub fn mac_builder(&self, mac: Option<&str>) -> Result<MacBuilder, SiError> {
        let mac = mac.unwrap_or(self.mac.as_str());
        let builder = MacBuilder::with_defined_term(mac)?.allowed(&self.allowed_macs()?);

        if !builder.is_allowed() {
            return Err(SiError::Mac(simac::MacError::NotAllowed(builder.mac_type())));
        }

        Ok(builder)
    }
}
