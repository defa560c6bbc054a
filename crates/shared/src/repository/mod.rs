mod product;

pub use self::product::ProductRepository;
