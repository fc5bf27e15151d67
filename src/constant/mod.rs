mod pool;

pub use pool::ConstantPool;
