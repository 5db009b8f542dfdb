pub mod achievement;
pub mod act;
pub mod contact_submission;
pub mod feature;
pub mod gallery_item;
pub mod media_item;
pub mod news_post;
pub mod performer;
pub mod review;
pub mod sequence;
pub mod service;
pub mod testimonial;
pub mod workshop_testimonial;

pub use achievement::Entity as Achievement;
pub use act::Entity as Act;
pub use contact_submission::Entity as ContactSubmission;
pub use feature::Entity as Feature;
pub use gallery_item::Entity as GalleryItem;
pub use media_item::Entity as MediaItem;
pub use news_post::Entity as NewsPost;
pub use performer::Entity as Performer;
pub use review::Entity as Review;
pub use sequence::Entity as Sequence;
pub use service::Entity as Service;
pub use testimonial::Entity as Testimonial;
pub use workshop_testimonial::Entity as WorkshopTestimonial;
