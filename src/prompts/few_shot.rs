//! Fixed few-shot texts embedded in every prompt.
//!
//! One shared ground-truth example caption plus one hand-authored corrupted
//! counterpart and one instruction per hallucination kind. These are the
//! authoritative template texts; tests compare prompts against them.

/// Shared ground-truth example caption used by all five demonstrations.
pub const EXAMPLE_GROUND_TRUTH: &str = "The image features an open market with a variety of fruits on display. A man and a woman are shopping in the produce market, with the woman wearing a yellow shirt and the man dressed in a white shirt. They seem to be a couple browsing the offerings at a farmers market. Various fruits such as bananas, apples, and oranges are available at the market. Bananas are scattered throughout the market, with a prominent bunch located near the right side. A large number of apples can be seen around the space, while oranges are also displayed in various spots, particularly at the top-right corner of the market. The fruits are well-organized, making the market appear lively and colorful.";

pub const OBJECT_INSTRUCTION: &str = "OBJECT HALLUCINATION ONLY: Include multiple (2-3) plausible but non-existent objects relevant to the scene. DO NOT change any attributes, relationships, scene context, or add irrelevant content.";

pub const ATTRIBUTE_INSTRUCTION: &str = "ATTRIBUTE HALLUCINATION ONLY: Incorrectly change multiple (2-3) attributes (like colors, textures, sizes) of different objects mentioned. DO NOT add new objects, change relationships, scene context, or add irrelevant content.";

pub const RELATIONSHIP_INSTRUCTION: &str = "RELATIONSHIP HALLUCINATION ONLY: Incorrectly describe multiple (2-3) spatial or interactional relationships between objects mentioned. DO NOT add new objects, change attributes, scene context, or add irrelevant content.";

pub const SCENE_INSTRUCTION: &str = "SCENE HALLUCINATION ONLY: Make multiple (2-3) misrepresentations of the overall scene, context, or setting described. DO NOT add new objects, change attributes, object relationships, or add irrelevant content.";

pub const IRRELEVANT_INSTRUCTION: &str = "IRRELEVANT HALLUCINATION ONLY: Introduce multiple (2-3) details or statements that are completely irrelevant or nonsensical to the scene. DO NOT add new objects, change attributes, relationships, or scene context.";

/// Corrupted counterpart demonstrating object hallucinations.
pub const EXAMPLE_OBJECT_HALLUCINATION: &str = "Displayed in an open market is a wide array of fruits, some piled in wicker baskets floating mid-air. Shopping amidst the produce are a man in a white shirt and a woman wearing yellow, occasionally consulting a small, hovering robotic assistant. This couple appears to be perusing the selections at what looks like a farmers market selling glowing oranges. The market offers various fruits like bananas and apples. While bananas are spread around, a significant bunch is noticeable on the right. Numerous apples are visible in the area, and oranges are placed in several locations, including the upper-right section. The neat arrangement of the fruits gives the market a vibrant and colorful feel.";

/// Corrupted counterpart demonstrating attribute hallucinations.
pub const EXAMPLE_ATTRIBUTE_HALLUCINATION: &str = "An open market setting is depicted, showcasing a variety of fruits. A man (in a green shirt) and a woman (wearing a striped shirt) are seen shopping in the produce area. They look like a couple examining the goods at a local farmers market. Fruits available include blue bananas, apples, and oranges. Bananas can be found scattered about, with one large bunch standing out near the right. Plenty of apples are present throughout the space, and oranges are visible in different spots, notably at the market's top-right. The organized fruit displays lend a lively and colorful appearance to the scene.";

/// Corrupted counterpart demonstrating relationship hallucinations.
pub const EXAMPLE_RELATIONSHIP_HALLUCINATION: &str = "The scene presents an open market displaying diverse fruits. A woman wearing a yellow shirt is shopping in the produce section, standing directly behind a man in a white shirt. They seem to be a couple exploring the items at a farmers market. Available fruits include bananas, apples, and oranges. Bananas are arranged carefully on top of the apples, with a main bunch located near the right. Many apples are visible around the vicinity, and the oranges are balanced precariously on the woman's head. Oranges are arranged in several places, especially towards the top-right. The orderly display of fruits contributes to the market's bright and lively atmosphere.";

/// Corrupted counterpart demonstrating scene hallucinations.
pub const EXAMPLE_SCENE_HALLUCINATION: &str = "This image shows an outdoor market set up on a beach, filled with various fruits on display stands under large, colorful umbrellas. In the produce aisle, a man wearing white and a woman in yellow are shopping. They give the impression of being a couple looking over the selections at this night-time farmers market. The market stocks fruits like bananas, apples, and oranges. Bananas are dotted around, with a noticeable cluster near the right edge. A significant quantity of apples is spread across the area, and oranges appear in multiple spots, particularly the top-right corner. Due to the well-arranged fruits, the market feels bustling and colorful.";

/// Corrupted counterpart demonstrating irrelevant hallucinations.
pub const EXAMPLE_IRRELEVANT_HALLUCINATION: &str = "Featured in the image is an open-air market abundant with different fruits; a jazz trio plays softly in the corner. A man clothed in white and a woman in a yellow shirt shop in the produce zone, while a nearby cat chases a laser pointer dot. They appear as a couple checking out the produce at a farmers market where the price signs are written in ancient hieroglyphs. Options like bananas, apples, and oranges are offered. Bananas are seen in various places, with a large bunch near the right side. Many apples are present in the surroundings, while oranges are arranged in spots like the market's top-right. The fruits' organized presentation makes the market seem animated and full of color.";
