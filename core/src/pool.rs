use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque identifier of an image, usually a path or URL the renderer resolves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(Cow<'static, str>);

impl ImageId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ImageId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only catalog of images per category.
pub trait ImagePool {
    /// Ordered images of `category`, `None` when the pool does not know it.
    fn images_for(&self, category: Category) -> Option<&[ImageId]>;
}

impl<P: ImagePool + ?Sized> ImagePool for &P {
    fn images_for(&self, category: Category) -> Option<&[ImageId]> {
        (**self).images_for(category)
    }
}

static FLOWER_IMAGES: [ImageId; 6] = [
    ImageId::from_static("/images/daisy.jpg"),
    ImageId::from_static("/images/sunflower.jpg"),
    ImageId::from_static("/images/tulip.jpg"),
    ImageId::from_static("/images/rose.jpg"),
    ImageId::from_static("/images/purple.jpg"),
    ImageId::from_static("/images/tree.jpg"),
];

static ANIMAL_IMAGES: [ImageId; 6] = [
    ImageId::from_static("/images/bunny.jpg"),
    ImageId::from_static("/images/deer.jpg"),
    ImageId::from_static("/images/duck.jpg"),
    ImageId::from_static("/images/kitten.jpg"),
    ImageId::from_static("/images/panda.jpg"),
    ImageId::from_static("/images/puppy.jpg"),
];

static RANDOM_IMAGES: [ImageId; 6] = [
    ImageId::from_static("/images/ball.jpg"),
    ImageId::from_static("/images/door.jpg"),
    ImageId::from_static("/images/fan.jpg"),
    ImageId::from_static("/images/book.jpg"),
    ImageId::from_static("/images/refrigerator.jpg"),
    ImageId::from_static("/images/tv.jpg"),
];

/// The stock catalog shipped with the game, six images per category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuiltinPool;

impl ImagePool for BuiltinPool {
    fn images_for(&self, category: Category) -> Option<&[ImageId]> {
        let images: &[ImageId] = match category {
            Category::Flower => &FLOWER_IMAGES,
            Category::Animal => &ANIMAL_IMAGES,
            Category::Random => &RANDOM_IMAGES,
        };
        Some(images)
    }
}

/// Caller-assembled catalog, categories without an entry are unknown.
#[derive(Clone, Debug, Default)]
pub struct MapPool {
    images: HashMap<Category, Vec<ImageId>>,
}

impl MapPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images<I>(mut self, category: Category, images: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        self.insert(category, images);
        self
    }

    /// Replaces the images of `category`.
    pub fn insert<I>(&mut self, category: Category, images: I)
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        let images = images.into_iter().map(Into::into).collect();
        self.images.insert(category, images);
    }
}

impl ImagePool for MapPool {
    fn images_for(&self, category: Category) -> Option<&[ImageId]> {
        self.images.get(&category).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pool_has_six_images_per_category() {
        for category in Category::ALL {
            let images = BuiltinPool.images_for(category).unwrap();
            assert_eq!(images.len(), 6, "{category}");
        }
        assert_eq!(
            BuiltinPool.images_for(Category::Animal).unwrap()[0].as_str(),
            "/images/bunny.jpg"
        );
    }

    #[test]
    fn map_pool_only_knows_inserted_categories() {
        let pool = MapPool::new().with_images(Category::Flower, ["a", "b"]);

        assert_eq!(pool.images_for(Category::Flower).map(<[_]>::len), Some(2));
        assert!(pool.images_for(Category::Random).is_none());
    }
}
