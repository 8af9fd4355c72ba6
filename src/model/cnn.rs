//! CNN Model Architecture for Skin Disease Classification
//!
//! This module implements the Convolutional Neural Network using the Burn
//! framework for classifying skin diseases from photographs. The network is
//! only ever run forward here: the weights are an externally trained
//! artifact loaded from a record file.

use burn::{
    config::Config,
    module::Module,
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{AdaptiveAvgPool2d, AdaptiveAvgPool2dConfig, MaxPool2d, MaxPool2dConfig},
        Dropout, DropoutConfig, Linear, LinearConfig, PaddingConfig2d, Relu,
    },
    tensor::{backend::Backend, Tensor},
};

/// Configuration for the SkinClassifier CNN model
#[derive(Config, Debug)]
pub struct SkinClassifierConfig {
    /// Number of output classes
    #[config(default = "10")]
    pub num_classes: usize,

    /// Input image size (assumes square images)
    #[config(default = "128")]
    pub input_size: usize,

    /// Dropout rate for the classifier head
    #[config(default = "0.3")]
    pub dropout_rate: f64,

    /// Number of input channels (3 for RGB)
    #[config(default = "3")]
    pub in_channels: usize,

    /// Base number of convolutional filters
    #[config(default = "32")]
    pub base_filters: usize,
}

/// A CNN block with Conv2d, ReLU, and MaxPool
#[derive(Module, Debug)]
pub struct ConvBlock<B: Backend> {
    pub conv: Conv2d<B>,
    pub relu: Relu,
    pub pool: MaxPool2d,
}

impl<B: Backend> ConvBlock<B> {
    /// Create a new convolutional block
    pub fn new(
        in_channels: usize,
        out_channels: usize,
        kernel_size: usize,
        device: &B::Device,
    ) -> Self {
        let conv = Conv2dConfig::new([in_channels, out_channels], [kernel_size, kernel_size])
            .with_padding(PaddingConfig2d::Same)
            .init(device);

        let pool = MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init();

        Self {
            conv,
            relu: Relu::new(),
            pool,
        }
    }

    /// Forward pass through the block
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.conv.forward(x);
        let x = self.relu.forward(x);
        self.pool.forward(x)
    }
}

/// Skin Disease Classifier CNN
///
/// Architecture:
/// - 4 convolutional blocks with increasing filter sizes
/// - ReLU and MaxPooling after each convolution
/// - Global Average Pooling
/// - Fully connected classifier with dropout
///
/// The input is channels-last `[batch, height, width, 3]`, the layout the
/// preprocessing pipeline produces and the layout the weights were trained
/// with; it is permuted to channels-first internally before convolution.
#[derive(Module, Debug)]
pub struct SkinClassifier<B: Backend> {
    pub conv1: ConvBlock<B>,
    pub conv2: ConvBlock<B>,
    pub conv3: ConvBlock<B>,
    pub conv4: ConvBlock<B>,

    pub global_pool: AdaptiveAvgPool2d,

    pub fc1: Linear<B>,
    pub dropout: Dropout,
    pub fc2: Linear<B>,

    num_classes: usize,
}

impl<B: Backend> SkinClassifier<B> {
    /// Create a new SkinClassifier from configuration
    pub fn new(config: &SkinClassifierConfig, device: &B::Device) -> Self {
        let base = config.base_filters;

        // Convolutional blocks: 3 -> 32 -> 64 -> 128 -> 256
        let conv1 = ConvBlock::new(config.in_channels, base, 3, device); // 128 -> 64
        let conv2 = ConvBlock::new(base, base * 2, 3, device); // 64 -> 32
        let conv3 = ConvBlock::new(base * 2, base * 4, 3, device); // 32 -> 16
        let conv4 = ConvBlock::new(base * 4, base * 8, 3, device); // 16 -> 8

        let global_pool = AdaptiveAvgPool2dConfig::new([1, 1]).init();

        let fc1 = LinearConfig::new(base * 8, 128).init(device);
        let dropout = DropoutConfig::new(config.dropout_rate).init();
        let fc2 = LinearConfig::new(128, config.num_classes).init(device);

        Self {
            conv1,
            conv2,
            conv3,
            conv4,
            global_pool,
            fc1,
            dropout,
            fc2,
            num_classes: config.num_classes,
        }
    }

    /// Forward pass through the network
    ///
    /// # Arguments
    /// * `x` - Input tensor of shape [batch_size, height, width, 3]
    ///
    /// # Returns
    /// * Logits tensor of shape [batch_size, num_classes]
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        // Channels-last to channels-first: [B, H, W, C] -> [B, C, H, W]
        let x = x.permute([0, 3, 1, 2]);

        // Convolutional feature extraction
        let x = self.conv1.forward(x);
        let x = self.conv2.forward(x);
        let x = self.conv3.forward(x);
        let x = self.conv4.forward(x);

        // Global pooling: [B, C, H, W] -> [B, C, 1, 1]
        let x = self.global_pool.forward(x);

        // Flatten: [B, C, 1, 1] -> [B, C]
        let [batch_size, channels, _, _] = x.dims();
        let x = x.reshape([batch_size, channels]);

        // Classifier
        let x = self.fc1.forward(x);
        let x = Relu::new().forward(x);
        let x = self.dropout.forward(x);
        self.fc2.forward(x)
    }

    /// Forward pass with softmax for inference
    pub fn forward_softmax(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let logits = self.forward(x);
        burn::tensor::activation::softmax(logits, 1)
    }

    /// Get the number of output classes
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_skin_classifier_output_shape() {
        let device = Default::default();
        let config = SkinClassifierConfig::new();
        let model = SkinClassifier::<TestBackend>::new(&config, &device);

        // Channels-last input: [batch=2, height=128, width=128, channels=3]
        let input = Tensor::<TestBackend, 4>::zeros([2, 128, 128, 3], &device);

        let output = model.forward(input);
        let dims = output.dims();

        assert_eq!(dims[0], 2); // batch size
        assert_eq!(dims[1], 10); // num classes
    }

    #[test]
    fn test_skin_classifier_softmax_distribution() {
        let device = Default::default();
        let config = SkinClassifierConfig::new();
        let model = SkinClassifier::<TestBackend>::new(&config, &device);

        let input = Tensor::<TestBackend, 4>::zeros([1, 128, 128, 3], &device);
        let probs = model.forward_softmax(input);

        let values: Vec<f32> = probs.into_data().to_vec().unwrap();
        assert_eq!(values.len(), 10);

        let sum: f32 = values.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4, "probabilities sum to {}", sum);
        assert!(values.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_num_classes_accessor() {
        let device = Default::default();
        let config = SkinClassifierConfig::new().with_num_classes(5);
        let model = SkinClassifier::<TestBackend>::new(&config, &device);
        assert_eq!(model.num_classes(), 5);
    }
}
