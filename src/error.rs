pub type Result<T> = std::result::Result<T, ChainMapError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainMapError {
    #[error("key not found in any layer")]
    KeyNotFound,

    #[error("key already present in the override layer")]
    DuplicateKey,

    #[error("layer index {index} out of range; stack holds {len} layer{}", if *(.len) == 1 { "" } else { "s" })]
    LayerIndexOutOfRange { index: usize, len: usize },
}
