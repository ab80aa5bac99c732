//! The bundled seven-product tech catalog.

use crate::Product;

pub fn bundled_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Pixel 8 Pro".to_string(),
            category: "smartphone".to_string(),
            price: 999.0,
            description: "Google's pro-level phone with advanced AI cameras.".to_string(),
            specs: "Tensor G3, 12GB RAM, 128GB Storage, 50MP Camera".to_string(),
            rating: 4.8,
            image_url: "https://picsum.photos/300/300?random=1".to_string(),
            in_stock: true,
            tags: tags(&[
                "android",
                "google",
                "camera",
                "ai",
                "flagship",
                "photo",
                "photography",
            ]),
        },
        Product {
            id: "p2".to_string(),
            name: "Galaxy S24 Ultra".to_string(),
            category: "smartphone".to_string(),
            price: 1299.0,
            description: "The ultimate Android experience with S-Pen.".to_string(),
            specs: "Snapdragon 8 Gen 3, 200MP Camera, 12GB RAM".to_string(),
            rating: 4.9,
            image_url: "https://picsum.photos/300/300?random=2".to_string(),
            in_stock: true,
            tags: tags(&[
                "android",
                "samsung",
                "stylus",
                "productivity",
                "big screen",
                "zoom",
                "business",
            ]),
        },
        Product {
            id: "p3".to_string(),
            name: "iPhone 15".to_string(),
            category: "smartphone".to_string(),
            price: 799.0,
            description: "The standard for smartphones with Dynamic Island.".to_string(),
            specs: "A16 Bionic, 48MP Camera, 6.1\" Display".to_string(),
            rating: 4.7,
            image_url: "https://picsum.photos/300/300?random=3".to_string(),
            in_stock: true,
            tags: tags(&["apple", "ios", "simple", "reliable", "video", "social media"]),
        },
        Product {
            id: "p4".to_string(),
            name: "Sony WH-1000XM5".to_string(),
            category: "audio".to_string(),
            price: 349.0,
            description: "Industry-leading noise canceling headphones.".to_string(),
            specs: "30hr Battery, LDAC, Noise Canceling".to_string(),
            rating: 4.8,
            image_url: "https://picsum.photos/300/300?random=4".to_string(),
            in_stock: true,
            tags: tags(&[
                "music",
                "travel",
                "quiet",
                "anc",
                "wireless",
                "bluetooth",
                "comfort",
            ]),
        },
        Product {
            id: "p5".to_string(),
            name: "MacBook Air M3".to_string(),
            category: "laptop".to_string(),
            price: 1099.0,
            description: "Supercharged by M3, incredibly thin and light.".to_string(),
            specs: "M3 Chip, 8GB RAM, 256GB SSD, 13.6\" Liquid Retina".to_string(),
            rating: 4.9,
            image_url: "https://picsum.photos/300/300?random=5".to_string(),
            in_stock: false,
            tags: tags(&[
                "apple",
                "macos",
                "coding",
                "student",
                "lightweight",
                "battery",
                "work",
                "writing",
            ]),
        },
        Product {
            id: "p6".to_string(),
            name: "Dell XPS 13".to_string(),
            category: "laptop".to_string(),
            price: 999.0,
            description: "Compact and powerful Windows ultrabook.".to_string(),
            specs: "Intel Core Ultra 7, 16GB RAM, 512GB SSD".to_string(),
            rating: 4.5,
            image_url: "https://picsum.photos/300/300?random=6".to_string(),
            in_stock: true,
            tags: tags(&[
                "windows",
                "business",
                "premium",
                "thin",
                "portability",
                "office",
            ]),
        },
        Product {
            id: "p7".to_string(),
            name: "Budget King X1".to_string(),
            category: "smartphone".to_string(),
            price: 299.0,
            description: "Great value for money with decent performance.".to_string(),
            specs: "MediaTek Dimensity, 5000mAh Battery, 90Hz Screen".to_string(),
            rating: 4.2,
            image_url: "https://picsum.photos/300/300?random=7".to_string(),
            in_stock: true,
            tags: tags(&["cheap", "affordable", "battery", "kids", "starter", "basic"]),
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
