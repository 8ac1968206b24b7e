//! Word pools for the random marketplace generator.

pub struct Category {
    pub name: &'static str,
    pub taxonomy_id: i64,
    pub items: &'static [&'static str],
    pub materials: &'static [&'static [&'static str]],
    pub styles: &'static [&'static str],
    pub tags: &'static [&'static [&'static str]],
    /// Inclusive, in cents
    pub price_range: (i64, i64),
    pub weight_range: (f32, f32),
    pub weight_unit: &'static str,
    pub descriptions: &'static [&'static str],
}

pub const SHOP_PREFIXES: &[&str] = &[
    "Cozy", "Wild", "Little", "Golden", "Silver", "Rustic", "Modern", "Vintage", "Handmade", "Artisan", "Bohemian",
    "Enchanted", "Creative", "Whimsical", "Sunlit", "Moonstone", "Coastal", "Mountain", "Prairie", "Maple", "Ivy",
    "Cedar", "Birch", "Willow", "Sage", "Amber", "Coral", "Indigo", "Crimson", "Emerald", "Honey", "Velvet", "Pebble",
    "Daisy", "Bloom", "Frost", "Misty", "Woven", "Twisted", "Polished",
];

pub const SHOP_NOUNS: &[&str] = &[
    "Craft", "Studio", "Workshop", "Atelier", "Boutique", "Nest", "Haven", "Forge", "Loom", "Kiln", "Garden", "Cottage",
    "Hearth", "Hollow", "Creek", "Ridge", "Meadow", "Grove", "Valley", "Lane",
];

pub const SHOP_SUFFIXES: &[&str] =
    &["Co", "Designs", "Creations", "Goods", "Supply", "Made", "Works", "Shop", "Market", "Collective", "House", "Lab", "Place", ""];

pub const FIRST_NAMES: &[&str] = &[
    "Emma", "Olivia", "Ava", "Isabella", "Sophia", "Mia", "Charlotte", "Amelia", "Harper", "Evelyn", "James", "Liam",
    "Noah", "William", "Oliver", "Benjamin", "Elijah", "Lucas", "Mason", "Logan", "Alexander", "Ethan", "Daniel",
    "Henry", "Sarah", "Jessica", "Emily", "Rachel", "Hannah", "Lauren", "Abigail", "Madison",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez", "Anderson",
    "Taylor", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Moore", "Allen", "Young", "King", "Wright",
    "Lopez", "Hill", "Scott", "Green", "Adams", "Baker", "Nelson", "Carter",
];

/// (city, state, zip)
pub const CITIES: &[(&str, &str, &str)] = &[
    ("Portland", "OR", "97201"),
    ("Austin", "TX", "78701"),
    ("Seattle", "WA", "98101"),
    ("Denver", "CO", "80201"),
    ("Nashville", "TN", "37201"),
    ("Asheville", "NC", "28801"),
    ("Brooklyn", "NY", "11201"),
    ("San Francisco", "CA", "94102"),
    ("Chicago", "IL", "60601"),
    ("Boston", "MA", "02101"),
    ("Philadelphia", "PA", "19101"),
    ("Savannah", "GA", "31401"),
    ("Santa Fe", "NM", "87501"),
    ("Burlington", "VT", "05401"),
    ("Bend", "OR", "97701"),
    ("Sedona", "AZ", "86336"),
    ("Madison", "WI", "53701"),
    ("Bozeman", "MT", "59715"),
    ("Charlottesville", "VA", "22901"),
    ("Ann Arbor", "MI", "48104"),
];

pub const STREETS: &[&str] = &[
    "123 Main St", "456 Oak Ave", "789 Elm St", "321 Pine Rd", "654 Maple Dr", "147 Cedar Ln", "258 Birch Way",
    "369 Walnut Ct", "741 Ash Pl", "852 Spruce Blvd", "963 Willow St", "174 Poplar Ave", "285 Chestnut Ln",
    "396 Redwood Dr", "417 Magnolia Way",
];

pub const REVIEW_TEXTS: &[&str] = &[
    "Absolutely love this! The quality is amazing and it arrived faster than expected.",
    "Beautiful craftsmanship. You can tell this was made with care and attention to detail.",
    "Exceeded my expectations! It is even more stunning in person.",
    "Perfect gift for my sister. She was so happy when she opened it! Will definitely order again.",
    "Gorgeous piece! The materials are high quality and it's exactly as described.",
    "So happy with my purchase. It's even better than I imagined. Highly recommend this shop!",
    "The packaging was beautiful and it arrived in perfect condition. Love supporting small businesses.",
    "Wonderful quality and fast shipping. This seller clearly takes pride in their work.",
    "I've gotten so many compliments! It's become my new favorite piece.",
    "Ordered this as a treat for myself and I'm so glad I did. Worth every penny.",
    "The attention to detail is incredible. You can really see the handmade quality.",
    "Already planning my next order! The colors are vibrant and true to the photos.",
    "This is my third purchase from this shop and they never disappoint.",
    "Arrived beautifully wrapped. The recipient absolutely loved it.",
    "Stunning work! I'll be back for more. Great communication from the seller too.",
    "Fast shipping, great packaging, beautiful product. What more could you ask for?",
];

pub const SHOP_ANNOUNCEMENTS: &[&str] = &[
    "Welcome to our shop! All items are handmade with love. Free shipping on orders over $50!",
    "Thank you for visiting! New items added weekly. Custom orders always welcome.",
    "Handcrafted with care in our small studio. Each piece is unique and made to order.",
    "We believe in quality over quantity. Every item is tested and approved before shipping.",
    "Supporting local artisans and sustainable practices. Thank you for shopping small!",
    "Holiday sale! 15% off everything. Use code HANDMADE at checkout.",
    "New collection just dropped! Check out our latest designs. Custom requests welcome.",
    "All items ship within 1-3 business days. Gift wrapping available at checkout.",
];

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Jewelry",
        taxonomy_id: 1207,
        items: &[
            "Pendant Necklace", "Chain Necklace", "Choker", "Layered Necklace", "Hoop Earrings", "Stud Earrings",
            "Drop Earrings", "Dangle Earrings", "Statement Ring", "Stacking Ring", "Signet Ring", "Band Ring",
            "Charm Bracelet", "Cuff Bracelet", "Bangle", "Tennis Bracelet", "Anklet", "Body Chain", "Hair Pin", "Brooch",
        ],
        materials: &[
            &["sterling silver", "silver chain"],
            &["14k gold", "gold chain"],
            &["rose gold plated brass"],
            &["brass", "copper"],
            &["stainless steel"],
            &["freshwater pearls", "silk cord"],
            &["natural gemstones", "gold wire"],
            &["recycled silver"],
            &["titanium"],
            &["glass beads", "elastic cord"],
        ],
        styles: &["minimalist", "bohemian", "vintage", "art deco", "modern", "classic", "statement", "dainty", "geometric", "organic"],
        tags: &[
            &["handmade", "jewelry", "gift for her", "birthday gift"],
            &["minimalist", "everyday", "delicate", "layering"],
            &["bohemian", "boho", "festival", "free spirit"],
            &["vintage inspired", "antique style", "retro"],
            &["wedding", "bridal", "bridesmaid", "anniversary"],
        ],
        price_range: (1500, 15000),
        weight_range: (0.1, 2.0),
        weight_unit: "oz",
        descriptions: &[
            "Beautifully handcrafted with attention to every detail. Perfect for everyday wear or as a special gift.",
            "Each piece is made to order in our studio using ethically sourced materials.",
            "A stunning addition to any jewelry collection. Lightweight and comfortable for all-day wear.",
            "Designed and crafted by hand in our small workshop using only the finest materials.",
        ],
    },
    Category {
        name: "Home & Living",
        taxonomy_id: 562,
        items: &[
            "Cutting Board", "Serving Board", "Cheese Board", "Bread Board", "Floating Shelf", "Wall Shelf",
            "Corner Shelf", "Bookshelf", "Picture Frame", "Wall Art", "Wall Hanging", "Macrame", "Candle Holder", "Vase",
            "Planter", "Coaster Set", "Tray", "Bowl", "Spoon Set", "Utensil Holder",
        ],
        materials: &[
            &["walnut wood", "food-safe mineral oil"],
            &["maple wood", "beeswax finish"],
            &["cherry wood", "natural oil"],
            &["oak wood", "wood stain"],
            &["reclaimed pine", "steel brackets"],
            &["bamboo", "natural finish"],
            &["olive wood"],
            &["acacia wood", "resin"],
            &["concrete", "wood"],
            &["ceramic", "glaze"],
        ],
        styles: &["rustic", "farmhouse", "modern", "minimalist", "industrial", "scandinavian", "mid-century", "coastal", "bohemian", "traditional"],
        tags: &[
            &["handmade", "home decor", "kitchen", "housewarming gift"],
            &["rustic", "farmhouse", "country", "wood"],
            &["modern", "minimalist", "contemporary", "clean lines"],
            &["wedding gift", "anniversary", "personalized"],
            &["eco-friendly", "sustainable", "reclaimed", "natural"],
        ],
        price_range: (2500, 30000),
        weight_range: (0.5, 15.0),
        weight_unit: "lb",
        descriptions: &[
            "Handcrafted in our workshop from carefully selected hardwood and finished with a food-safe coating.",
            "A beautiful functional piece that adds warmth and character to any space.",
            "This piece is made to last for generations and built to withstand daily use.",
            "Each piece is unique due to the natural variations in wood grain and color.",
        ],
    },
    Category {
        name: "Clothing",
        taxonomy_id: 3,
        items: &[
            "Linen Dress", "Cotton Blouse", "Silk Scarf", "Wool Sweater", "Denim Jacket", "Kimono Robe", "Wrap Dress",
            "Maxi Skirt", "Crop Top", "Tunic", "Cardigan", "Poncho", "Beanie", "Mittens", "Socks", "Tote Bag",
        ],
        materials: &[
            &["100% organic cotton"],
            &["linen", "cotton blend"],
            &["merino wool"],
            &["silk", "satin"],
            &["bamboo fabric"],
            &["hemp", "organic cotton"],
            &["cashmere blend"],
            &["recycled polyester"],
        ],
        styles: &["casual", "bohemian", "vintage", "elegant", "streetwear", "classic", "romantic", "oversized", "fitted", "relaxed"],
        tags: &[
            &["handmade", "clothing", "fashion", "sustainable"],
            &["organic", "eco-friendly", "natural fibers"],
            &["bohemian", "boho", "festival wear"],
            &["vintage inspired", "retro", "classic style"],
            &["gift for her", "birthday", "comfortable"],
        ],
        price_range: (2000, 20000),
        weight_range: (0.2, 2.0),
        weight_unit: "lb",
        descriptions: &[
            "Made from the softest natural fabrics, this piece drapes beautifully and feels amazing against the skin.",
            "Designed for comfort without sacrificing style. Cut and sewn by hand in our small studio.",
            "A wardrobe staple that transitions effortlessly from day to night.",
            "Inspired by timeless silhouettes with a modern twist.",
        ],
    },
    Category {
        name: "Art & Collectibles",
        taxonomy_id: 4,
        items: &[
            "Print", "Original Painting", "Digital Download", "Illustration", "Photograph", "Poster", "Canvas Art",
            "Watercolor", "Sculpture", "Figurine", "Wall Mural", "Art Print Set", "Custom Portrait", "Pet Portrait",
            "Landscape Art", "Abstract Art",
        ],
        materials: &[
            &["archival paper", "pigment ink"],
            &["canvas", "acrylic paint"],
            &["watercolor paper", "watercolor paint"],
            &["cotton rag paper", "giclée ink"],
            &["wood panel", "oil paint"],
            &["digital file"],
            &["recycled paper", "soy ink"],
            &["metal", "mixed media"],
        ],
        styles: &["abstract", "modern", "impressionist", "photorealistic", "whimsical", "botanical", "landscape", "portrait", "pop art", "surreal"],
        tags: &[
            &["art", "wall art", "home decor", "gallery wall"],
            &["print", "illustration", "artwork", "poster"],
            &["original art", "one of a kind", "collectible"],
            &["gift idea", "housewarming", "office decor"],
            &["nature art", "botanical", "landscape", "floral"],
        ],
        price_range: (1000, 50000),
        weight_range: (0.1, 5.0),
        weight_unit: "lb",
        descriptions: &[
            "Printed on archival-quality paper to ensure lasting color and clarity.",
            "An original work of art created in our studio. Each piece is signed and numbered.",
            "Transform your space with this stunning artwork.",
            "Museum-quality reproduction printed with premium pigment inks. Ships flat in protective packaging.",
        ],
    },
    Category {
        name: "Craft Supplies",
        taxonomy_id: 5,
        items: &[
            "Bead Set", "Yarn Bundle", "Fabric Pack", "Stamp Set", "Charm Pack", "Wire Kit", "Paint Set", "Tool Kit",
            "Pattern", "Template", "Stencil Set", "Embroidery Kit", "Resin Kit", "Clay Set", "Leather Scraps",
            "Button Collection",
        ],
        materials: &[
            &["mixed materials"],
            &["glass beads"],
            &["cotton yarn"],
            &["premium fabric"],
            &["metal findings"],
            &["natural leather"],
            &["polymer clay"],
            &["UV resin"],
        ],
        styles: &["colorful", "natural", "vintage", "modern", "assorted", "premium", "beginner-friendly", "professional"],
        tags: &[
            &["craft supplies", "DIY", "maker", "creative"],
            &["beading", "jewelry making", "supplies"],
            &["sewing", "quilting", "fabric", "notions"],
            &["art supplies", "painting", "drawing"],
            &["gift for crafter", "hobby", "handmade"],
        ],
        price_range: (500, 8000),
        weight_range: (0.1, 3.0),
        weight_unit: "lb",
        descriptions: &[
            "Everything you need to get started on your next creative project.",
            "High-quality supplies sourced from trusted manufacturers.",
            "A wonderful assortment of materials to inspire your creativity.",
            "Professional-grade supplies at an affordable price.",
        ],
    },
];

/// The craft-supplies category marks its listings as supplies.
pub const SUPPLY_TAXONOMY_ID: i64 = 5;
