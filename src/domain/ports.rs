pub trait Storage: Send + Sync {
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = crate::utils::error::Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = crate::utils::error::Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn required_keys(&self) -> &[String];
    fn default_resolution(&self) -> i64;
    fn status_label(&self) -> &str;
    fn strict(&self) -> bool;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// File stem for outputs; `{timestamp}` is expanded at write time.
    fn output_filename(&self) -> &str;
}
